//! Integration tests: sliding-window rate limiter
//!
//! Runs the Lua script against a real Redis instance.
//!
//! Coverage:
//! - Requests under the quota are admitted
//! - The request after the quota inside one window is rejected
//! - Authors are limited independently
//! - Quota frees up once the window slides past old requests

mod common;

use post_service::ratelimit::{RateLimitConfig, RateLimiter};
use std::time::Duration;

#[tokio::test]
async fn enforces_quota_within_window() {
    let redis = common::setup_redis().await.expect("redis container");
    let limiter = RateLimiter::new(
        redis,
        RateLimitConfig {
            max_requests: 2,
            window_seconds: 60,
        },
    );

    assert!(!limiter.is_rate_limited("author_1").await.expect("first call"));
    assert!(!limiter.is_rate_limited("author_1").await.expect("second call"));
    assert!(limiter.is_rate_limited("author_1").await.expect("third call"));
    // Still limited on a further attempt
    assert!(limiter.is_rate_limited("author_1").await.expect("fourth call"));
}

#[tokio::test]
async fn authors_are_limited_independently() {
    let redis = common::setup_redis().await.expect("redis container");
    let limiter = RateLimiter::new(
        redis,
        RateLimitConfig {
            max_requests: 1,
            window_seconds: 60,
        },
    );

    assert!(!limiter.is_rate_limited("author_2").await.expect("author_2 first"));
    assert!(limiter.is_rate_limited("author_2").await.expect("author_2 second"));

    // A different author still has quota
    assert!(!limiter.is_rate_limited("author_3").await.expect("author_3 first"));
}

#[tokio::test]
async fn quota_recovers_after_window_slides() {
    let redis = common::setup_redis().await.expect("redis container");
    let limiter = RateLimiter::new(
        redis,
        RateLimitConfig {
            max_requests: 1,
            window_seconds: 1,
        },
    );

    assert!(!limiter.is_rate_limited("author_4").await.expect("first call"));
    assert!(limiter.is_rate_limited("author_4").await.expect("over quota"));

    tokio::time::sleep(Duration::from_millis(1200)).await;

    assert!(!limiter.is_rate_limited("author_4").await.expect("after window"));
}

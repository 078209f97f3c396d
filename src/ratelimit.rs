/// Sliding-window rate limiter backed by Redis
///
/// Tracks post timestamps per author in a sorted set and enforces the quota
/// atomically with a Lua script, so concurrent requests from the same author
/// cannot race past the limit. A transport failure is surfaced to the caller
/// instead of letting the request through.
use crate::error::Result;
use redis::aio::ConnectionManager;

#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 2,
            window_seconds: 60,
        }
    }
}

#[derive(Clone)]
pub struct RateLimiter {
    redis: ConnectionManager,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(redis: ConnectionManager, config: RateLimitConfig) -> Self {
        Self { redis, config }
    }

    /// Record one request for `author_id` and report whether it is over quota.
    ///
    /// Drops timestamps older than the window, counts the remainder, and only
    /// admits (ZADDs) the request when under the limit. Runs as a single Lua
    /// script so the check and the write cannot interleave.
    pub async fn is_rate_limited(&self, author_id: &str) -> Result<bool> {
        let mut conn = self.redis.clone();
        let key = format!("ratelimit:{}", author_id);

        const LUA: &str = r#"
            local window_ms = tonumber(ARGV[1])
            local max_requests = tonumber(ARGV[2])
            local now_ms = tonumber(ARGV[3])
            redis.call('ZREMRANGEBYSCORE', KEYS[1], 0, now_ms - window_ms)
            local count = redis.call('ZCARD', KEYS[1])
            if count >= max_requests then
                return 1
            end
            redis.call('ZADD', KEYS[1], now_ms, ARGV[4])
            redis.call('PEXPIRE', KEYS[1], window_ms)
            return 0
        "#;

        let now_ms = chrono::Utc::now().timestamp_millis();
        // Unique member so same-millisecond requests each count once
        let member = uuid::Uuid::new_v4().to_string();
        let limited: i64 = redis::cmd("EVAL")
            .arg(LUA)
            .arg(1)
            .arg(&key)
            .arg(self.config.window_seconds as i64 * 1000)
            .arg(self.config.max_requests as i64)
            .arg(now_ms)
            .arg(&member)
            .query_async(&mut conn)
            .await?;

        Ok(limited == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_config_default() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_requests, 2);
        assert_eq!(config.window_seconds, 60);
    }
}

//! Integration tests: post repository
//!
//! Exercises the persistence layer against a real PostgreSQL database.
//!
//! Coverage:
//! - Insert returns the created record with server-assigned id and timestamp
//! - Global fetch is ordered newest first and honors the limit
//! - Per-author fetch filters correctly and may be empty

mod common;

use post_service::db::post_repo;

#[tokio::test]
async fn create_returns_persisted_record() {
    let pool = common::setup_postgres().await.expect("postgres container");

    let post = post_repo::create_post(&pool, "user_a", "😀")
        .await
        .expect("insert post");

    assert_eq!(post.author_id, "user_a");
    assert_eq!(post.content, "😀");

    let fetched = post_repo::find_posts_by_author(&pool, "user_a", 10)
        .await
        .expect("fetch by author");
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, post.id);
    assert_eq!(fetched[0].created_at, post.created_at);
}

#[tokio::test]
async fn recent_posts_are_newest_first_and_capped() {
    let pool = common::setup_postgres().await.expect("postgres container");

    for i in 0..5 {
        let content = "🎉".repeat(i + 1);
        post_repo::create_post(&pool, "user_b", &content)
            .await
            .expect("insert post");
    }

    let posts = post_repo::find_recent_posts(&pool, 3).await.expect("fetch");

    assert_eq!(posts.len(), 3);
    for pair in posts.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
    // Newest insert comes back first
    assert_eq!(posts[0].content, "🎉".repeat(5));
}

#[tokio::test]
async fn author_feed_filters_by_author() {
    let pool = common::setup_postgres().await.expect("postgres container");

    post_repo::create_post(&pool, "user_c", "🔥").await.expect("insert");
    post_repo::create_post(&pool, "user_d", "🌊").await.expect("insert");
    post_repo::create_post(&pool, "user_c", "🚀").await.expect("insert");

    let posts = post_repo::find_posts_by_author(&pool, "user_c", 100)
        .await
        .expect("fetch by author");

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.author_id == "user_c"));
    assert_eq!(posts[0].content, "🚀");

    let none = post_repo::find_posts_by_author(&pool, "user_unknown", 100)
        .await
        .expect("fetch by unknown author");
    assert!(none.is_empty());
}

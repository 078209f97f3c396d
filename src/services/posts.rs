/// Post service - the rate-limited creation flow
use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::Post;
use crate::ratelimit::RateLimiter;
use crate::validation::validate_content;
use sqlx::PgPool;
use tracing::info;

pub struct PostService {
    pool: PgPool,
    limiter: RateLimiter,
}

impl PostService {
    pub fn new(pool: PgPool, limiter: RateLimiter) -> Self {
        Self { pool, limiter }
    }

    /// Create a post on behalf of `author_id`.
    ///
    /// Order matters: content is validated before the limiter is consulted,
    /// so malformed requests never consume quota or touch Redis, and the
    /// limiter is consulted before the insert, so over-quota requests never
    /// reach the database.
    pub async fn create_post(&self, author_id: &str, content: &str) -> Result<Post> {
        validate_content(content)?;

        if self.limiter.is_rate_limited(author_id).await? {
            info!(author_id = %author_id, "Posting quota exceeded");
            return Err(AppError::RateLimited);
        }

        let post = post_repo::create_post(&self.pool, author_id, content).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");

        Ok(post)
    }
}

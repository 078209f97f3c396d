/// Feed service - feed reads with live author resolution
use crate::clients::IdentityClient;
use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::{Author, FeedItem, Post};
use sqlx::PgPool;
use std::collections::HashMap;

pub struct FeedService {
    pool: PgPool,
    identity: IdentityClient,
    max_items: i64,
}

impl FeedService {
    pub fn new(pool: PgPool, identity: IdentityClient, max_items: i64) -> Self {
        Self {
            pool,
            identity,
            max_items,
        }
    }

    /// Most recent posts across all authors, newest first.
    pub async fn global_feed(&self) -> Result<Vec<FeedItem>> {
        let posts = post_repo::find_recent_posts(&self.pool, self.max_items).await?;
        self.resolve_authors(posts).await
    }

    /// Most recent posts by one author, newest first. May be empty.
    pub async fn author_feed(&self, author_id: &str) -> Result<Vec<FeedItem>> {
        let posts = post_repo::find_posts_by_author(&self.pool, author_id, self.max_items).await?;
        self.resolve_authors(posts).await
    }

    /// Pair each post with its author, resolved in one batch call.
    ///
    /// A post whose author the provider no longer knows is an internal
    /// consistency failure for the whole read, not a row to skip.
    async fn resolve_authors(&self, posts: Vec<Post>) -> Result<Vec<FeedItem>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let mut author_ids: Vec<String> =
            posts.iter().map(|post| post.author_id.clone()).collect();
        author_ids.sort();
        author_ids.dedup();

        let authors = self
            .identity
            .get_users(&author_ids, self.max_items as usize)
            .await?;

        let by_id: HashMap<String, Author> = authors
            .into_iter()
            .map(|author| (author.id.clone(), author))
            .collect();

        posts
            .into_iter()
            .map(|post| {
                let author = by_id.get(&post.author_id).cloned().ok_or_else(|| {
                    AppError::Internal(format!("Author for post {} not found", post.id))
                })?;
                Ok(FeedItem { post, author })
            })
            .collect()
    }
}

/// Data models for post-service
///
/// - `Post`: the persisted record, immutable after creation
/// - `Author`: profile projection resolved from the identity provider at
///   read time, never stored locally
/// - `FeedItem`: the `{ post, author }` pair feeds are made of
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    /// Opaque identifier assigned by the identity provider
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Public profile projection of an identity-provider user
///
/// Only the fields safe to expose to clients; everything else the provider
/// knows about a user stays server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub username: String,
    pub profile_image_url: String,
}

/// A post paired with its resolved author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub post: Post,
    pub author: Author,
}

/// Request body for post creation
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

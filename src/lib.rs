/// Post Service Library
///
/// A small social-post API: authenticated users publish short emoji-only
/// posts, and clients read a global feed or a per-author feed. Author
/// profiles are not stored locally; they are resolved at read time from the
/// hosted identity provider that issued the caller's token.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for posts, feeds, and profiles
/// - `services`: Business logic layer (creation flow, feed composition)
/// - `db`: Database access layer and repositories
/// - `clients`: Identity provider REST client
/// - `middleware`: Bearer-token authentication middleware
/// - `ratelimit`: Redis-backed sliding-window rate limiter
/// - `auth`: JWT claims and verification helpers
/// - `validation`: Emoji-only content policy
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod auth;
pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ratelimit;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::{AppError, Result};

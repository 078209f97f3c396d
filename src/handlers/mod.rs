/// HTTP handlers for post-service endpoints
///
/// - Posts: rate-limited creation
/// - Feed: global and per-author reads
/// - Profiles: username lookup against the identity provider
pub mod feed;
pub mod posts;
pub mod profiles;

pub use feed::{get_author_feed, get_global_feed};
pub use posts::create_post;
pub use profiles::get_profile_by_username;

/// Business logic layer for post-service
///
/// - Post service: the rate-limited creation flow
/// - Feed service: feed reads with live author resolution
pub mod feed;
pub mod posts;

pub use feed::FeedService;
pub use posts::PostService;

/// Database access layer
pub mod post_repo;

/// Feed handlers - global and per-author feed reads
use crate::error::Result;
use crate::services::FeedService;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// Get the global feed
///
/// `GET /api/v1/feed` — newest posts first, each paired with its author.
pub async fn get_global_feed(service: web::Data<Arc<FeedService>>) -> Result<HttpResponse> {
    let items = service.global_feed().await?;

    Ok(HttpResponse::Ok().json(items))
}

/// Get the feed for one author
///
/// `GET /api/v1/posts/user/{author_id}` — possibly empty.
pub async fn get_author_feed(
    service: web::Data<Arc<FeedService>>,
    author_id: web::Path<String>,
) -> Result<HttpResponse> {
    let items = service.author_feed(&author_id).await?;

    Ok(HttpResponse::Ok().json(items))
}

/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::middleware::AuthorId;
use crate::models::CreatePostRequest;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// Create a new post
///
/// `POST /api/v1/posts` — requires a bearer token; body `{ "content": ... }`.
pub async fn create_post(
    service: web::Data<Arc<PostService>>,
    author_id: AuthorId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = service.create_post(&author_id.0, &req.content).await?;

    Ok(HttpResponse::Created().json(post))
}

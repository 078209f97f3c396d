/// Profile handlers - username lookup against the identity provider
use crate::clients::IdentityClient;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// Look up an author profile by username
///
/// `GET /api/v1/profiles/{username}`
pub async fn get_profile_by_username(
    identity: web::Data<Arc<IdentityClient>>,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    match identity.get_user_by_username(&username).await? {
        Some(author) => Ok(HttpResponse::Ok().json(author)),
        None => Err(AppError::NotFound(format!("User {} not found", username))),
    }
}

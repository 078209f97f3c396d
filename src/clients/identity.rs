/// Identity provider REST client
///
/// The hosted identity provider owns sign-up, sign-in, and user profiles.
/// This service never stores profile data; it resolves authors live from the
/// provider's backend API using a server-side secret key.
///
/// ## API Reference
///
/// - List users (filterable by id or username): GET /v1/users
///   Query params: `user_id` (repeatable), `username`, `limit`
use crate::config::IdentityConfig;
use crate::error::{AppError, Result};
use crate::models::Author;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Raw user object as returned by the provider
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    username: Option<String>,
    profile_image_url: Option<String>,
}

impl ProviderUser {
    /// Project the provider user down to the fields clients may see.
    fn into_author(self) -> Author {
        let username = self.username.unwrap_or_else(|| self.id.clone());
        Author {
            id: self.id,
            username,
            profile_image_url: self.profile_image_url.unwrap_or_default(),
        }
    }
}

#[derive(Clone)]
pub struct IdentityClient {
    config: IdentityConfig,
    http: Client,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch a batch of users by id in one call.
    ///
    /// Feeds resolve every distinct author with a single request; the
    /// provider caps list responses, so `limit` rides along explicitly.
    pub async fn get_users(&self, ids: &[String], limit: usize) -> Result<Vec<Author>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/users", self.config.api_url);
        let mut query: Vec<(&str, String)> = ids
            .iter()
            .map(|id| ("user_id", id.clone()))
            .collect();
        query.push(("limit", limit.to_string()));

        debug!(count = ids.len(), "Resolving authors from identity provider");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.secret_key)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::IdentityProvider(format!(
                "user list request failed with status {}",
                status
            )));
        }

        let users: Vec<ProviderUser> = response.json().await?;
        Ok(users.into_iter().map(ProviderUser::into_author).collect())
    }

    /// Look up a single user by username.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<Author>> {
        let url = format!("{}/v1/users", self.config.api_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.config.secret_key)
            .query(&[("username", username), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::IdentityProvider(format!(
                "username lookup failed with status {}",
                status
            )));
        }

        let users: Vec<ProviderUser> = response.json().await?;
        Ok(users.into_iter().next().map(ProviderUser::into_author))
    }
}

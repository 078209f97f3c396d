/// Configuration management for Post Service
///
/// This module handles loading and managing configuration from environment
/// variables. A `.env` file is honored in development via dotenvy (loaded in
/// `main`).
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Rate-limit store (Redis) configuration
    pub redis: RedisConfig,
    /// Identity provider configuration
    pub identity: IdentityConfig,
    /// Posting rate-limit configuration
    pub rate_limit: RateLimitSettings,
    /// Feed configuration
    pub feed: FeedConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Rate-limit store (Redis) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL
    pub url: String,
}

/// Identity provider configuration
///
/// The provider issues the bearer tokens callers authenticate with and owns
/// the canonical user profiles joined into feed reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the provider's backend REST API
    pub api_url: String,
    /// Server-side secret key for backend API calls
    pub secret_key: String,
    /// PEM-encoded public key used to verify caller JWTs
    pub jwt_public_key: String,
}

/// Posting rate-limit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Maximum posts per window per author
    pub max_requests: u32,
    /// Sliding window length in seconds
    pub window_seconds: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: 2,
            window_seconds: 60,
        }
    }
}

/// Feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Maximum posts returned by a feed read
    pub max_items: i64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { max_items: 100 }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("POST_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("POST_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/posts".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            redis: RedisConfig {
                url: std::env::var("REDIS_URL")
                    .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            },
            identity: {
                let secret_key =
                    std::env::var("IDENTITY_SECRET_KEY").unwrap_or_else(|_| "".to_string());
                if app_env.eq_ignore_ascii_case("production") && secret_key.trim().is_empty() {
                    return Err("IDENTITY_SECRET_KEY must be set in production".to_string());
                }

                IdentityConfig {
                    api_url: std::env::var("IDENTITY_API_URL")
                        .unwrap_or_else(|_| "https://api.identity.localhost".to_string()),
                    secret_key,
                    jwt_public_key: std::env::var("IDENTITY_JWT_PUBLIC_KEY")
                        .unwrap_or_else(|_| "".to_string()),
                }
            },
            rate_limit: RateLimitSettings {
                max_requests: std::env::var("RATE_LIMIT_MAX_POSTS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2),
                window_seconds: std::env::var("RATE_LIMIT_WINDOW_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            },
            feed: FeedConfig {
                // Negative values would wrap when passed as a batch size
                max_items: std::env::var("FEED_MAX_ITEMS")
                    .ok()
                    .and_then(|v| v.parse::<i64>().ok())
                    .filter(|v| *v >= 0)
                    .unwrap_or(100),
            },
        })
    }
}

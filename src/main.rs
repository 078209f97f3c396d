use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use chrono::Utc;
use post_service::auth::TokenVerifier;
use post_service::clients::IdentityClient;
use post_service::handlers;
use post_service::middleware::AuthMiddleware;
use post_service::ratelimit::{RateLimitConfig, RateLimiter};
use post_service::services::{FeedService, PostService};
use redis::aio::ConnectionManager;
use redis::RedisError;
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct HealthState {
    db_pool: sqlx::Pool<sqlx::Postgres>,
    redis_manager: ConnectionManager,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

impl HealthState {
    fn new(db_pool: sqlx::Pool<sqlx::Postgres>, redis_manager: ConnectionManager) -> Self {
        Self {
            db_pool,
            redis_manager,
        }
    }

    async fn check_postgres(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.db_pool)
            .await
            .map(|_| ())
    }

    async fn check_redis(&self) -> Result<(), RedisError> {
        let mut conn = self.redis_manager.clone();
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        if pong == "PONG" {
            Ok(())
        } else {
            Err(RedisError::from((
                redis::ErrorKind::ResponseError,
                "unexpected PING response",
            )))
        }
    }
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match state.check_postgres().await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "post-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "post-service"
        })),
    }
}

async fn readiness_summary(state: web::Data<HealthState>) -> HttpResponse {
    let mut checks = HashMap::new();
    let mut ready = true;

    let start = Instant::now();
    let pg_result = state.check_postgres().await;
    let pg_latency = Some(start.elapsed().as_millis() as u64);
    let postgres_check = match pg_result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "PostgreSQL connection successful".to_string(),
            latency_ms: pg_latency,
        },
        Err(e) => {
            ready = false;
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: format!("PostgreSQL connection failed: {}", e),
                latency_ms: pg_latency,
            }
        }
    };
    checks.insert("postgresql".to_string(), postgres_check);

    let start = Instant::now();
    let redis_result = state.check_redis().await;
    let redis_latency = Some(start.elapsed().as_millis() as u64);
    let redis_check = match redis_result {
        Ok(_) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "Redis ping successful".to_string(),
            latency_ms: redis_latency,
        },
        Err(e) => {
            ready = false;
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: format!("Redis ping failed: {}", e),
                latency_ms: redis_latency,
            }
        }
    };
    checks.insert("redis".to_string(), redis_check);

    let status = if ready {
        ComponentStatus::Healthy
    } else {
        ComponentStatus::Unhealthy
    };

    let response = ReadinessResponse {
        ready,
        status,
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

/// Post Service
///
/// A small API service for an emoji microblog.
///
/// # Routes
///
/// - `POST /api/v1/posts` - Create a post (authenticated, rate limited)
/// - `GET /api/v1/feed` - Global feed, newest first
/// - `GET /api/v1/posts/user/{author_id}` - Per-author feed
/// - `GET /api/v1/profiles/{username}` - Author profile lookup
///
/// # Architecture
///
/// - HTTP handlers with request/response conversion
/// - PostgreSQL for post storage
/// - Redis for the sliding-window posting limit
/// - Hosted identity provider for authentication and author profiles
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match post_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting post-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Token verifier for the identity provider's bearer tokens
    let verifier = if config.identity.jwt_public_key.trim().is_empty() {
        tracing::warn!(
            "Identity JWT public key not configured; authentication middleware will fail requests"
        );
        Arc::new(TokenVerifier::disabled())
    } else {
        match TokenVerifier::from_pem(&config.identity.jwt_public_key) {
            Ok(v) => Arc::new(v),
            Err(e) => {
                tracing::error!("Invalid identity JWT public key: {}", e);
                eprintln!("ERROR: Invalid identity JWT public key: {}", e);
                std::process::exit(1);
            }
        }
    };

    // Database connection pool + migrations
    let db_pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&db_pool).await {
        tracing::error!("Database migration failed: {:#}", e);
        eprintln!("ERROR: Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Connected to database, migrations applied");

    // Redis connection for the rate limiter
    let redis_client = redis::Client::open(config.redis.url.clone()).map_err(|e| {
        io::Error::new(io::ErrorKind::Other, format!("Invalid Redis URL: {e}"))
    })?;
    let redis_manager = ConnectionManager::new(redis_client).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize Redis connection: {e}"),
        )
    })?;

    tracing::info!("Connected to Redis");

    let limiter = RateLimiter::new(
        redis_manager.clone(),
        RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_seconds: config.rate_limit.window_seconds,
        },
    );

    let identity_client = Arc::new(IdentityClient::new(config.identity.clone()));
    let post_service = Arc::new(PostService::new(db_pool.clone(), limiter));
    let feed_service = Arc::new(FeedService::new(
        db_pool.clone(),
        (*identity_client).clone(),
        config.feed.max_items,
    ));

    let post_service_data = web::Data::new(post_service);
    let feed_service_data = web::Data::new(feed_service);
    let identity_data = web::Data::new(identity_client);
    let health_state = web::Data::new(HealthState::new(db_pool.clone(), redis_manager));

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(post_service_data.clone())
            .app_data(feed_service_data.clone())
            .app_data(identity_data.clone())
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            // Health check endpoints
            .route("/api/v1/health", web::get().to(health_summary))
            .route("/api/v1/health/ready", web::get().to(readiness_summary))
            .route("/api/v1/health/live", web::get().to(liveness_check))
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/feed").route("", web::get().to(handlers::get_global_feed)),
                    )
                    .service(
                        web::scope("/posts")
                            .service(
                                web::resource("")
                                    .wrap(AuthMiddleware::new(verifier.clone()))
                                    .route(web::post().to(handlers::create_post)),
                            )
                            .service(
                                web::resource("/user/{author_id}")
                                    .route(web::get().to(handlers::get_author_feed)),
                            ),
                    )
                    .service(web::scope("/profiles").route(
                        "/{username}",
                        web::get().to(handlers::get_profile_by_username),
                    )),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}

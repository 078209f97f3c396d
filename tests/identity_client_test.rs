//! Integration tests: identity provider client
//!
//! Runs the client against a mocked provider API.

use post_service::clients::IdentityClient;
use post_service::config::IdentityConfig;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> IdentityClient {
    IdentityClient::new(IdentityConfig {
        api_url: server.uri(),
        secret_key: "sk_test_secret".to_string(),
        jwt_public_key: String::new(),
    })
}

#[tokio::test]
async fn batch_lookup_maps_provider_users() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(query_param("user_id", "user_1"))
        .and(header("Authorization", "Bearer sk_test_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "user_1",
                "username": "alice",
                "profile_image_url": "https://img.example/alice.png"
            },
            {
                "id": "user_2",
                "username": null,
                "profile_image_url": null
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let authors = client
        .get_users(&["user_1".to_string(), "user_2".to_string()], 100)
        .await
        .expect("batch lookup");

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].id, "user_1");
    assert_eq!(authors[0].username, "alice");
    assert_eq!(authors[0].profile_image_url, "https://img.example/alice.png");
    // Missing fields fall back instead of failing deserialization
    assert_eq!(authors[1].username, "user_2");
    assert_eq!(authors[1].profile_image_url, "");
}

#[tokio::test]
async fn empty_batch_makes_no_request() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and fail the call

    let client = client_for(&server);
    let authors = client.get_users(&[], 100).await.expect("empty batch");

    assert!(authors.is_empty());
}

#[tokio::test]
async fn username_lookup_returns_match_or_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(query_param("username", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "user_1",
                "username": "alice",
                "profile_image_url": "https://img.example/alice.png"
            }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .and(query_param("username", "nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let found = client
        .get_user_by_username("alice")
        .await
        .expect("lookup alice");
    assert_eq!(found.expect("alice exists").username, "alice");

    let missing = client
        .get_user_by_username("nobody")
        .await
        .expect("lookup nobody");
    assert!(missing.is_none());
}

#[tokio::test]
async fn provider_error_status_surfaces_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.get_users(&["user_1".to_string()], 100).await;

    assert!(result.is_err());
}

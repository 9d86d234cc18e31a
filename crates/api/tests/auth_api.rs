//! HTTP-level integration tests for registration, login and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_auth, post_json, put_json_auth};
use serde_json::json;

#[tokio::test]
async fn register_returns_201_without_password_hash() {
    let app = common::build_test_app().await;

    let body = json!({ "username": "john", "password": "123" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "john");
    assert!(json["data"]["id"].is_number());
    assert!(json["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_username_returns_409() {
    let app = common::build_test_app().await;
    common::register(app.clone(), "alice", "x").await;

    let body = json!({ "username": "alice", "password": "y" });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    // The first registration's password is untouched.
    common::login(app, "alice", "x").await;
}

#[tokio::test]
async fn blank_username_returns_400() {
    let app = common::build_test_app().await;

    let body = json!({ "username": "", "password": "pw" });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn login_returns_token_and_ttl() {
    let app = common::build_test_app().await;
    let id = common::register(app.clone(), "john", "123").await;

    let body = json!({ "username": "john", "password": "123" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user_id"], id);
    assert_eq!(json["username"], "john");
    assert!(json["token"].is_string());
    assert_eq!(json["expires_in"], 3600);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_look_the_same() {
    let app = common::build_test_app().await;
    common::register(app.clone(), "john", "123").await;

    let wrong = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": "john", "password": "1234" }),
    )
    .await;
    let unknown = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "ghost", "password": "123" }),
    )
    .await;

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await, body_json(unknown).await);
}

#[tokio::test]
async fn logout_invalidates_the_token() {
    let app = common::build_test_app().await;
    let (_, token) = common::signed_in(&app, "john").await;

    let response = post_auth(app.clone(), "/api/v1/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = put_json_auth(
        app.clone(),
        "/api/v1/ratings/1",
        &token,
        json!({ "rating": 7 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Logging out again is harmless.
    let response = post_auth(app, "/api/v1/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn logout_without_token_is_no_content() {
    let app = common::build_test_app().await;
    let response = post_json(app, "/api/v1/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn registered_user_shows_up_in_health_counts() {
    let app = common::build_test_app().await;
    common::register(app.clone(), "john", "123").await;

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["store"]["users"], 1);
}

mod common;

use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_token_and_identity() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/user/register")
        .json(&json!({
            "userName": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["userName"], "nicola");
    assert!(body["data"]["userId"].as_i64().unwrap() > 0);
    assert!(body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = TestApp::spawn().await;

    app.register_user("duplicate", "password1").await;

    let response = app
        .post("/api/user/register")
        .json(&json!({
            "userName": "duplicate",
            "password": "password2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/user/register")
        .json(&json!({
            "userName": "ab",
            "password": "password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_round_trip() {
    let app = TestApp::spawn().await;

    let (_, registered_id) = app.register_user("roundtrip", "pass_word!1").await;

    let response = app
        .post("/api/user/login")
        .json(&json!({
            "userName": "roundtrip",
            "password": "pass_word!1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["userId"].as_i64().unwrap(), registered_id);
    assert_eq!(body["data"]["userName"], "roundtrip");
    assert!(body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = TestApp::spawn().await;

    app.register_user("wrongpass", "correct_password").await;

    let response = app
        .post("/api/user/login")
        .json(&json!({
            "userName": "wrongpass",
            "password": "wrong_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password_response() {
    let app = TestApp::spawn().await;

    app.register_user("knownuser", "correct_password").await;

    let unknown = app
        .post("/api/user/login")
        .json(&json!({ "userName": "ghostuser", "password": "whatever" }))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong = app
        .post("/api/user/login")
        .json(&json!({ "userName": "knownuser", "password": "not_it" }))
        .send()
        .await
        .expect("Failed to execute request");

    // Anti-enumeration: the two failures are indistinguishable.
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let unknown_body: serde_json::Value = unknown.json().await.unwrap();
    let wrong_body: serde_json::Value = wrong.json().await.unwrap();
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_issued_token_claims() {
    let app = TestApp::spawn().await;

    let (token, user_id) = app.register_user("jwtuser", "pass_word!").await;

    assert_eq!(token.split('.').count(), 3);

    let claims = app
        .token_issuer
        .verify(&token)
        .expect("Issued token failed verification");

    assert_eq!(claims.subject_id().unwrap(), user_id);
    assert_eq!(claims.name, "jwtuser");
    assert_eq!(claims.iss, common::TEST_JWT_ISSUER);
    assert_eq!(claims.aud, common::TEST_JWT_AUDIENCE);

    let expected_exp = Utc::now().timestamp() + common::TEST_JWT_EXPIRY_MINUTES * 60;
    assert!((claims.exp - expected_exp).abs() <= 60);
}

#[tokio::test]
async fn test_get_user_requires_token() {
    let app = TestApp::spawn().await;

    let (_, user_id) = app.register_user("private", "pass_word!").await;

    let response = app
        .get(&format!("/api/user/{}", user_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_profile_includes_todont_count() {
    let app = TestApp::spawn().await;

    let (token, user_id) = app.register_user("profiled", "pass_word!").await;
    app.create_todont(&token, "First").await;
    app.create_todont(&token, "Second").await;

    let response = app
        .get_authenticated(&format!("/api/user/profile/{}", "profiled"), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"].as_i64().unwrap(), user_id);
    assert_eq!(body["data"]["userName"], "profiled");
    assert_eq!(body["data"]["toDontCount"].as_u64().unwrap(), 2);
}

#[tokio::test]
async fn test_get_unknown_user_not_found() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register_user("someone", "pass_word!").await;

    let response = app
        .get_authenticated("/api/user/999999", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

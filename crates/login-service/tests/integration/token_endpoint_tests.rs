//! Token login, profile, logout and introspection tests.

use crate::harness::{login, spawn_login_server, spawn_login_server_with_clock};
use service_test_utils::{
    assert_detail, tamper_signature, ManualClock, TestTokenBuilder, OTHER_SECRET,
};
use std::sync::Arc;

#[tokio::test]
async fn test_token_login_echoes_token() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;
    let token = login(&server, "user2", "password456").await?;

    let response = server
        .client()
        .post(server.url_for("/login/token"))
        .json(&serde_json::json!({ "token": token }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["access_token"], token.as_str());
    assert_eq!(body["user_id"], 3);
    assert_eq!(body["email"], "user2@example.com");

    Ok(())
}

#[tokio::test]
async fn test_token_login_unknown_user_is_401() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;
    let token = TestTokenBuilder::new().for_user(42, "ghost").build();

    let response = server
        .client()
        .post(server.url_for("/login/token"))
        .json(&serde_json::json!({ "token": token }))
        .send()
        .await?;

    assert_eq!(response.status(), 401);
    assert_detail(&response.json().await?, "User not found");

    Ok(())
}

#[tokio::test]
async fn test_token_login_expired_and_invalid() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;

    let expired = TestTokenBuilder::new().expires_in(-60).build();
    let response = server
        .client()
        .post(server.url_for("/login/token"))
        .json(&serde_json::json!({ "token": expired }))
        .send()
        .await?;
    assert_eq!(response.status(), 401);
    assert_detail(&response.json().await?, "Token has expired");

    let foreign = TestTokenBuilder::new().signed_with(OTHER_SECRET).build();
    let response = server
        .client()
        .post(server.url_for("/login/token"))
        .json(&serde_json::json!({ "token": foreign }))
        .send()
        .await?;
    assert_eq!(response.status(), 401);
    assert_detail(&response.json().await?, "Invalid token");

    Ok(())
}

#[tokio::test]
async fn test_me_returns_profile() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;
    let token = login(&server, "admin", "admin123").await?;

    let response = server
        .client()
        .get(server.url_for("/me"))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body,
        serde_json::json!({
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "role": "admin"
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_me_requires_bearer() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;

    let response = server.client().get(server.url_for("/me")).send().await?;

    assert_eq!(response.status(), 401);
    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
    assert_detail(&response.json().await?, "Not authenticated");

    Ok(())
}

#[tokio::test]
async fn test_me_unknown_user_is_404() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;
    let token = TestTokenBuilder::new().for_user(99, "ghost").build();

    let response = server
        .client()
        .get(server.url_for("/me"))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(response.status(), 404);
    assert_detail(&response.json().await?, "User not found");

    Ok(())
}

#[tokio::test]
async fn test_logout_with_valid_token() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;
    let token = login(&server, "user1", "password123").await?;

    let response = server
        .client()
        .post(server.url_for("/logout"))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body["message"],
        "Successfully logged out. Please discard your token."
    );

    let tampered = tamper_signature(&token);
    let response = server
        .client()
        .post(server.url_for("/logout"))
        .bearer_auth(&tampered)
        .send()
        .await?;
    assert_eq!(response.status(), 401);

    Ok(())
}

#[tokio::test]
async fn test_validate_reports_claims() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;
    let token = login(&server, "admin", "admin123").await?;

    let response = server
        .client()
        .get(server.url_for("/validate"))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body,
        serde_json::json!({
            "valid": true,
            "user_id": 1,
            "username": "admin",
            "role": "admin"
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_validate_failure_is_exactly_valid_false() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;

    for token in [
        "garbage".to_string(),
        TestTokenBuilder::new().expires_in(-1).build(),
        tamper_signature(&TestTokenBuilder::new().build()),
        TestTokenBuilder::new().build_unsigned(),
    ] {
        let response = server
            .client()
            .get(server.url_for("/validate"))
            .bearer_auth(&token)
            .send()
            .await?;

        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await?, r#"{"valid":false}"#);
    }

    Ok(())
}

#[tokio::test]
async fn test_validate_without_header_is_401() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;

    let response = server.client().get(server.url_for("/validate")).send().await?;

    assert_eq!(response.status(), 401);

    Ok(())
}

#[tokio::test]
async fn test_token_expires_after_lifetime() -> Result<(), anyhow::Error> {
    let clock = Arc::new(ManualClock::starting_now());
    let server = spawn_login_server_with_clock(clock.clone()).await?;
    let token = login(&server, "admin", "admin123").await?;

    let validate = |token: String| {
        let request = server
            .client()
            .get(server.url_for("/validate"))
            .bearer_auth(token);
        async move { request.send().await?.json::<serde_json::Value>().await }
    };

    assert_eq!(validate(token.clone()).await?["valid"], true);

    clock.advance(chrono::Duration::minutes(61));
    assert_eq!(
        validate(token).await?,
        serde_json::json!({ "valid": false })
    );

    Ok(())
}

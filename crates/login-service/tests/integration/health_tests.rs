//! Operational endpoint tests.

use crate::harness::spawn_login_server;

#[tokio::test]
async fn test_health_endpoint_returns_ok() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;

    let response = server.client().get(server.url_for("/health")).send().await?;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await?, "OK");

    Ok(())
}

#[tokio::test]
async fn test_metrics_endpoint_is_served() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;

    let response = server.client().get(server.url_for("/metrics")).send().await?;

    assert_eq!(response.status(), 200);

    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_for_ui_origin() -> Result<(), anyhow::Error> {
    let server = spawn_login_server().await?;

    let response = server
        .client()
        .request(reqwest::Method::OPTIONS, server.url_for("/login/credentials"))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );

    Ok(())
}

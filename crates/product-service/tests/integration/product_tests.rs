//! Catalogue, stock and category endpoints with a valid token.

use crate::harness::{spawn_product_server, user_token};
use serde_json::{json, Value};
use service_test_utils::{assert_detail, TestServer};

async fn get_json(server: &TestServer, path: &str) -> Result<(u16, Value), anyhow::Error> {
    let response = server
        .client()
        .get(server.url_for(path))
        .bearer_auth(user_token())
        .send()
        .await?;
    let status = response.status().as_u16();
    Ok((status, response.json().await?))
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .map(|items| items.iter().filter_map(|p| p["id"].as_i64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_list_and_filter_products() -> Result<(), anyhow::Error> {
    let server = spawn_product_server().await?;

    let (status, body) = get_json(&server, "/products").await?;
    assert_eq!(status, 200);
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    assert_eq!(body[0]["sku"], "LAP-001");
    assert_eq!(body[0]["price"], 999.99);

    let (_, body) = get_json(&server, "/products?category=electronics").await?;
    assert_eq!(ids(&body), vec![1, 4]);

    let (_, body) = get_json(&server, "/products?min_price=20&max_price=400").await?;
    assert_eq!(ids(&body), vec![2, 4]);

    let (_, body) = get_json(&server, "/products?in_stock=false").await?;
    assert!(ids(&body).is_empty());

    let (_, body) = get_json(&server, "/products?limit=2&offset=1").await?;
    assert_eq!(ids(&body), vec![2, 3]);

    let (status, _) = get_json(&server, "/products?limit=500").await?;
    assert_eq!(status, 422);

    Ok(())
}

#[tokio::test]
async fn test_get_by_id_and_sku() -> Result<(), anyhow::Error> {
    let server = spawn_product_server().await?;

    let (status, body) = get_json(&server, "/products/3").await?;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "USB-C Cable");

    let (status, body) = get_json(&server, "/products/sku/MON-001").await?;
    assert_eq!(status, 200);
    assert_eq!(body["id"], 4);

    let (status, body) = get_json(&server, "/products/sku/NOPE-000").await?;
    assert_eq!(status, 404);
    assert_detail(&body, "Product not found");

    Ok(())
}

#[tokio::test]
async fn test_create_update_delete_product() -> Result<(), anyhow::Error> {
    let server = spawn_product_server().await?;
    let token = user_token();

    let response = server
        .client()
        .post(server.url_for("/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Webcam",
            "price": 59.99,
            "stock": 15,
            "category": "Electronics",
            "sku": "CAM-001"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await?;
    assert_eq!(body["id"], 5);
    assert_eq!(body["description"], Value::Null);

    let response = server
        .client()
        .post(server.url_for("/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Dup",
            "price": 1.0,
            "stock": 1,
            "category": "X",
            "sku": "CAM-001"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 400);
    assert_detail(&response.json().await?, "SKU already exists");

    let response = server
        .client()
        .post(server.url_for("/products"))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Free",
            "price": 0,
            "stock": 1,
            "category": "X",
            "sku": "FREE-001"
        }))
        .send()
        .await?;
    assert_eq!(response.status(), 422);

    let response = server
        .client()
        .put(server.url_for("/products/5"))
        .bearer_auth(&token)
        .json(&json!({ "stock": 20 }))
        .send()
        .await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["stock"], 20);
    assert_eq!(body["name"], "Webcam");

    let response = server
        .client()
        .delete(server.url_for("/products/5"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(response.status(), 204);

    let (status, _) = get_json(&server, "/products/5").await?;
    assert_eq!(status, 404);

    Ok(())
}

#[tokio::test]
async fn test_stock_adjustment() -> Result<(), anyhow::Error> {
    let server = spawn_product_server().await?;
    let token = user_token();

    let response = server
        .client()
        .patch(server.url_for("/products/1/stock?quantity=-10"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({ "product_id": 1, "previous_stock": 50, "current_stock": 40, "change": -10 })
    );

    let response = server
        .client()
        .patch(server.url_for("/products/1/stock?quantity=-41"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(response.status(), 400);
    assert_detail(&response.json().await?, "Insufficient stock");

    let response = server
        .client()
        .patch(server.url_for("/products/1/stock"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(response.status(), 422);

    Ok(())
}

#[tokio::test]
async fn test_categories() -> Result<(), anyhow::Error> {
    let server = spawn_product_server().await?;

    let (status, body) = get_json(&server, "/categories").await?;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "categories": ["Accessories", "Electronics"] }));

    Ok(())
}

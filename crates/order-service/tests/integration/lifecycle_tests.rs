//! Create, update, cancel, delete and reset.

use crate::harness::{admin_token, get_json, ids, spawn_order_server};
use serde_json::{json, Value};
use service_test_utils::assert_detail;

fn new_order() -> Value {
    json!({
        "user_id": 2,
        "items": [
            { "product_id": 2, "product_name": "Wireless Mouse", "quantity": 2, "price": 29.99 },
            { "product_id": 3, "product_name": "USB-C Cable", "quantity": 3, "price": 12.99 }
        ],
        "shipping_address": "456 Oak Ave, Town, State 67890"
    })
}

#[tokio::test]
async fn test_create_order() -> Result<(), anyhow::Error> {
    let server = spawn_order_server().await?;

    let response = server
        .client()
        .post(server.url_for("/orders"))
        .bearer_auth(admin_token())
        .json(&new_order())
        .send()
        .await?;

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await?;
    assert_eq!(body["id"], 4);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_amount"], 98.95);
    assert_eq!(body["created_at"], body["updated_at"]);

    Ok(())
}

#[tokio::test]
async fn test_create_order_rejections() -> Result<(), anyhow::Error> {
    let server = spawn_order_server().await?;
    let post = |body: Value| {
        server
            .client()
            .post(server.url_for("/orders"))
            .bearer_auth(admin_token())
            .json(&body)
            .send()
    };

    let mut empty = new_order();
    empty["items"] = json!([]);
    let response = post(empty).await?;
    assert_eq!(response.status(), 400);
    assert_detail(&response.json().await?, "Order must contain at least one item");

    let mut zero_quantity = new_order();
    zero_quantity["items"][0]["quantity"] = json!(0);
    assert_eq!(post(zero_quantity).await?.status(), 422);

    let mut negative_price = new_order();
    negative_price["items"][1]["price"] = json!(-1.5);
    assert_eq!(post(negative_price).await?.status(), 422);

    let mut missing_address = new_order();
    if let Some(fields) = missing_address.as_object_mut() {
        fields.remove("shipping_address");
    }
    assert_eq!(post(missing_address).await?.status(), 422);

    let (_, body) = get_json(&server, "/orders").await?;
    assert_eq!(ids(&body), vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_update_order() -> Result<(), anyhow::Error> {
    let server = spawn_order_server().await?;
    let put = |id: i64, body: Value| {
        server
            .client()
            .put(server.url_for(&format!("/orders/{id}")))
            .bearer_auth(admin_token())
            .json(&body)
            .send()
    };

    let response = put(2, json!({ "status": "processing", "shipping_address": "1 New Rd" })).await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "processing");
    assert_eq!(body["shipping_address"], "1 New Rd");
    assert_ne!(body["updated_at"], "2025-01-11T15:20:00");

    let response = put(2, json!({ "status": "teleported" })).await?;
    assert_eq!(response.status(), 400);

    let response = put(1, json!({ "shipping_address": "elsewhere" })).await?;
    assert_eq!(response.status(), 400);
    assert_detail(&response.json().await?, "Cannot update order with status 'delivered'");

    let response = put(99, json!({})).await?;
    assert_eq!(response.status(), 404);

    Ok(())
}

#[tokio::test]
async fn test_cancel_order() -> Result<(), anyhow::Error> {
    let server = spawn_order_server().await?;
    let cancel = |id: i64| {
        server
            .client()
            .post(server.url_for(&format!("/orders/{id}/cancel")))
            .bearer_auth(admin_token())
            .send()
    };

    let response = cancel(2).await?;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.json::<Value>().await?,
        json!({ "message": "Order cancelled successfully", "order_id": 2, "status": "cancelled" })
    );

    let response = cancel(2).await?;
    assert_eq!(response.status(), 400);
    assert_detail(&response.json().await?, "Cannot cancel order with status 'cancelled'");

    let response = cancel(3).await?;
    assert_eq!(response.status(), 400);
    assert_detail(&response.json().await?, "Cannot cancel order with status 'shipped'");

    let response = server
        .client()
        .put(server.url_for("/orders/2"))
        .bearer_auth(admin_token())
        .json(&json!({ "status": "pending" }))
        .send()
        .await?;
    assert_eq!(response.status(), 400);

    Ok(())
}

#[tokio::test]
async fn test_delete_then_reset() -> Result<(), anyhow::Error> {
    let server = spawn_order_server().await?;

    let response = server
        .client()
        .delete(server.url_for("/orders/1"))
        .bearer_auth(admin_token())
        .send()
        .await?;
    assert_eq!(response.status(), 204);

    let (status, _) = get_json(&server, "/orders/1").await?;
    assert_eq!(status, 404);

    let response = server.client().post(server.url_for("/reset-db")).send().await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Order database reset successfully");

    let (_, body) = get_json(&server, "/orders").await?;
    assert_eq!(ids(&body), vec![1, 2, 3]);

    Ok(())
}

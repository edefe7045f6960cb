//! Task CRUD nested under users, and the cross-user task listing.

use crate::harness::spawn_user_server;
use serde_json::{json, Value};
use service_test_utils::assert_detail;

#[tokio::test]
async fn test_list_user_tasks() -> Result<(), anyhow::Error> {
    let server = spawn_user_server().await?;

    let body: Value = server
        .client()
        .get(server.url_for("/users/1/tasks"))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(
        body,
        json!([
            {
                "id": 1,
                "user_id": 1,
                "title": "Complete project documentation",
                "description": "Write comprehensive API documentation",
                "status": "pending",
                "created_at": "2025-01-15T10:00:00",
                "updated_at": "2025-01-15T10:00:00",
                "due_date": "2025-01-20T23:59:59"
            },
            {
                "id": 2,
                "user_id": 1,
                "title": "Review pull requests",
                "description": "Review and merge pending PRs",
                "status": "completed",
                "created_at": "2025-01-14T09:00:00",
                "updated_at": "2025-01-15T14:30:00",
                "due_date": null
            }
        ])
    );

    let response = server.client().get(server.url_for("/users/5/tasks")).send().await?;
    assert_eq!(response.status(), 404);
    assert_detail(&response.json().await?, "User not found");

    Ok(())
}

#[tokio::test]
async fn test_get_task_scoped_to_user() -> Result<(), anyhow::Error> {
    let server = spawn_user_server().await?;

    let response = server.client().get(server.url_for("/users/2/tasks/3")).send().await?;
    assert_eq!(response.status(), 200);

    let response = server.client().get(server.url_for("/users/1/tasks/3")).send().await?;
    assert_eq!(response.status(), 404);
    assert_detail(&response.json().await?, "Task not found");

    Ok(())
}

#[tokio::test]
async fn test_create_task() -> Result<(), anyhow::Error> {
    let server = spawn_user_server().await?;

    let response = server
        .client()
        .post(server.url_for("/users/2/tasks"))
        .json(&json!({ "title": "Book venue", "due_date": "2025-02-01T09:30:00" }))
        .send()
        .await?;

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await?;
    assert_eq!(body["id"], 4);
    assert_eq!(body["user_id"], 2);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["due_date"], "2025-02-01T09:30:00");
    assert_eq!(body["created_at"], body["updated_at"]);

    Ok(())
}

#[tokio::test]
async fn test_create_task_invalid_status_is_400() -> Result<(), anyhow::Error> {
    let server = spawn_user_server().await?;

    let response = server
        .client()
        .post(server.url_for("/users/1/tasks"))
        .json(&json!({ "title": "Nope", "status": "blocked" }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    assert_detail(
        &response.json().await?,
        "Status must be 'pending' or 'completed'",
    );

    Ok(())
}

#[tokio::test]
async fn test_update_task_bumps_updated_at() -> Result<(), anyhow::Error> {
    let server = spawn_user_server().await?;

    let response = server
        .client()
        .put(server.url_for("/users/1/tasks/1"))
        .json(&json!({ "status": "completed" }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["title"], "Complete project documentation");
    assert_eq!(body["created_at"], "2025-01-15T10:00:00");
    assert_ne!(body["updated_at"], "2025-01-15T10:00:00");

    Ok(())
}

#[tokio::test]
async fn test_delete_task() -> Result<(), anyhow::Error> {
    let server = spawn_user_server().await?;

    let response = server
        .client()
        .delete(server.url_for("/users/1/tasks/2"))
        .send()
        .await?;
    assert_eq!(response.status(), 204);

    let response = server
        .client()
        .delete(server.url_for("/users/1/tasks/2"))
        .send()
        .await?;
    assert_eq!(response.status(), 404);

    Ok(())
}

#[tokio::test]
async fn test_list_all_tasks_filters() -> Result<(), anyhow::Error> {
    let server = spawn_user_server().await?;

    let body: Value = server
        .client()
        .get(server.url_for("/tasks?status=pending"))
        .send()
        .await?
        .json()
        .await?;
    let ids: Vec<i64> = body
        .as_array()
        .map(|tasks| tasks.iter().filter_map(|t| t["id"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![1, 3]);

    let body: Value = server
        .client()
        .get(server.url_for("/tasks?limit=1&offset=2"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let response = server
        .client()
        .get(server.url_for("/tasks?status=archived"))
        .send()
        .await?;
    assert_eq!(response.status(), 400);

    Ok(())
}

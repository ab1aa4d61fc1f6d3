//! End-to-end handler tests over the in-memory repository.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use domain_tasks::{handlers, InMemoryTaskRepository, TaskService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    Router::new().nest(
        "/tasks",
        handlers::router(TaskService::new(InMemoryTaskRepository::new())),
    )
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_task_applies_defaults() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/tasks", json!({"title": "buy milk"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "buy milk");
    assert_eq!(body["description"], "");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_create_task_without_title_is_rejected() {
    let app = app();

    for body in [json!({}), json!({"title": ""}), json!({"status": "pending"})] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/tasks", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Title is required");
    }
}

#[tokio::test]
async fn test_create_task_with_unknown_status_is_rejected() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/tasks",
            json!({"title": "walk dog", "status": "done"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Status must be pending or completed");
}

#[tokio::test]
async fn test_create_task_duplicate_title_conflicts() {
    let app = app();

    let first = app
        .clone()
        .oneshot(json_request("POST", "/tasks", json!({"title": "unique"})))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(json_request("POST", "/tasks", json!({"title": "unique"})))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert_eq!(body["error"], "Task with this title already exists");
}

#[tokio::test]
async fn test_get_all_returns_tasks_in_id_order() {
    let app = app();

    for title in ["one", "two", "three"] {
        app.clone()
            .oneshot(json_request("POST", "/tasks", json!({"title": title})))
            .await
            .unwrap();
    }

    let response = app.oneshot(get_request("/tasks/getAll")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_get_task_by_id() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/tasks", json!({"title": "find me"})))
        .await
        .unwrap();

    let found = app.clone().oneshot(get_request("/tasks/1")).await.unwrap();
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(body_json(found).await["title"], "find me");

    let missing = app.oneshot(get_request("/tasks/999")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(missing).await["error"],
        "Task with id 999 not found"
    );
}

#[tokio::test]
async fn test_non_positive_or_malformed_ids_are_rejected() {
    let app = app();

    for id in ["abc", "1.5", "0", "-3"] {
        let response = app
            .clone()
            .oneshot(get_request(&format!("/tasks/{id}")))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "id {id:?} should be rejected"
        );
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            format!("Invalid id '{id}': must be a positive integer")
        );
    }
}

#[tokio::test]
async fn test_update_task_partial_fields() {
    let app = app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/tasks",
            json!({"title": "report", "description": "quarterly"}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/tasks/1",
            json!({"status": "completed"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "report");
    assert_eq!(body["description"], "quarterly");
    assert_eq!(body["status"], "completed");
}

#[tokio::test]
async fn test_update_task_with_no_fields_is_rejected() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/tasks", json!({"title": "stale"})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PUT", "/tasks/1", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "At least one field (title, description, status) is required"
    );
}

#[tokio::test]
async fn test_update_task_empty_title_is_rejected() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/tasks", json!({"title": "keep"})))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("PUT", "/tasks/1", json!({"title": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Title cannot be empty");
}

#[tokio::test]
async fn test_update_missing_task_is_not_found() {
    let app = app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/tasks/77",
            json!({"status": "completed"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Task with id 77 not found"
    );
}

#[tokio::test]
async fn test_delete_task_then_delete_again() {
    let app = app();

    app.clone()
        .oneshot(json_request("POST", "/tasks", json!({"title": "ephemeral"})))
        .await
        .unwrap();

    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/tasks/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(
        body_json(deleted).await["message"],
        "Task 1 deleted successfully"
    );

    let again = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/tasks/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_body_is_a_bad_request() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tasks")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_wrong_field_type_is_a_bad_request() {
    let app = app();

    let response = app
        .oneshot(json_request("POST", "/tasks", json!({"title": 123})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_missing_content_type_is_a_bad_request() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tasks")
                .body(Body::from(json!({"title": "no header"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("error").is_some());
}

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use nirvaan_api::db::Storage;
use nirvaan_api::router::{api_router, AppState};

async fn test_app(tag: &str) -> (Router, Storage, std::path::PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "nirvaan-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = Storage::connect(&database_url)
        .await
        .expect("failed to open test database");
    let app = api_router(AppState::new(storage.clone()));
    (app, storage, temp_path)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

#[tokio::test]
async fn missing_message_returns_400_with_error_body() {
    let (app, _storage, temp_path) = test_app("contact-missing").await;

    let resp = app
        .oneshot(post_json(
            "/api/contact",
            json!({ "name": "A", "email": "a@b.co", "message": "" }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().is_some_and(|s| !s.is_empty()));

    let _ = std::fs::remove_file(&temp_path);
}

#[tokio::test]
async fn malformed_email_returns_400() {
    let (app, _storage, temp_path) = test_app("contact-email").await;

    let resp = app
        .oneshot(post_json(
            "/api/contact",
            json!({ "name": "A", "email": "not-an-email", "message": "hi" }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Invalid email address");

    let _ = std::fs::remove_file(&temp_path);
}

#[tokio::test]
async fn valid_submission_persists_exactly_one_row_and_returns_201() {
    let (app, storage, temp_path) = test_app("contact-ok").await;

    // No SMTP configured anywhere: email sends are no-ops and must not
    // affect the response.
    let resp = app
        .oneshot(post_json(
            "/api/contact",
            json!({
                "name": "Asha",
                "email": "asha@example.com",
                "phone": "+91 9999999999",
                "service": "SEO",
                "message": "Please audit our store."
            }),
        ))
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Contact form submitted successfully");
    let id = body["id"].as_i64().expect("id missing");
    assert!(id > 0);

    let total = storage.count_contacts("").await.expect("count failed");
    assert_eq!(total, 1);

    let rows = storage.list_contacts(10, 0, "").await.expect("list failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].name, "Asha");
    assert_eq!(rows[0].service.as_deref(), Some("SEO"));

    let _ = std::fs::remove_file(&temp_path);
}

#[tokio::test]
async fn contact_timestamps_are_server_assigned() {
    let (app, storage, temp_path) = test_app("contact-ts").await;

    let before = chrono::Utc::now();
    let resp = app
        .oneshot(post_json(
            "/api/contact",
            json!({
                "name": "B",
                "email": "b@example.com",
                "message": "hello",
                // Client-sent timestamps are not part of the schema and are
                // ignored by deserialization.
                "createdAt": "1999-01-01T00:00:00Z"
            }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let rows = storage.list_contacts(1, 0, "").await.expect("list failed");
    assert!(rows[0].created_at >= before - chrono::Duration::seconds(1));

    let _ = std::fs::remove_file(&temp_path);
}

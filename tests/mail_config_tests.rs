//! Exercises SMTP parameter resolution: the settings row wins, the
//! environment is the fallback, and the admin GET surfaces the fallback.
//!
//! The env-derived config is process-global, so everything depending on it
//! lives in a single test.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use nirvaan_api::auth;
use nirvaan_api::db::Storage;
use nirvaan_api::mail::resolve_mail_config;
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

fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("failed to build request")
}

fn authed_post(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
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
async fn settings_row_wins_over_env_fallback() {
    // Must run before the global config is first touched.
    unsafe {
        std::env::set_var("SMTP_HOST", "env.smtp.example.com");
        std::env::set_var("SMTP_PORT", "2525");
        std::env::set_var("SMTP_SECURE", "false");
        std::env::set_var("SMTP_USER", "env-user@example.com");
        std::env::set_var("SMTP_PASSWORD", "env-secret");
        std::env::set_var("ADMIN_EMAIL", "env-owner@example.com");
    }

    let (app, storage, temp_path) = test_app("mail-config").await;

    // No settings row yet: resolution falls back to the environment.
    let config = resolve_mail_config(&storage)
        .await
        .expect("env fallback was not picked up");
    assert_eq!(config.smtp_host, "env.smtp.example.com");
    assert_eq!(config.smtp_port, 2525);
    assert_eq!(config.smtp_user, "env-user@example.com");
    assert_eq!(config.smtp_password, "env-secret");
    assert_eq!(config.admin_email, "env-owner@example.com");

    // The admin GET surfaces the same fallback, password blanked.
    let (hash, salt) = auth::hash_password("pw");
    storage
        .upsert_admin("admin@example.com", &hash, &salt)
        .await
        .expect("failed to seed admin");
    let resp = app
        .clone()
        .oneshot(authed_post(
            "/api/admin/login",
            "",
            json!({ "email": "admin@example.com", "password": "pw" }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let token = body_json(resp).await["token"]
        .as_str()
        .expect("token missing")
        .to_string();

    let resp = app
        .clone()
        .oneshot(authed_get("/api/admin/email-settings", &token))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["smtpHost"], "env.smtp.example.com");
    assert_eq!(body["smtpPort"], 2525);
    assert_eq!(body["adminEmail"], "env-owner@example.com");
    assert_eq!(body["smtpPassword"], "");

    // Once the admin saves settings, the row takes precedence.
    let resp = app
        .oneshot(authed_post(
            "/api/admin/email-settings",
            &token,
            json!({
                "smtpHost": "db.smtp.example.com",
                "smtpPort": 465,
                "smtpSecure": true,
                "smtpUser": "db-user@example.com",
                "smtpPassword": "db-secret",
                "adminEmail": "db-owner@example.com"
            }),
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let config = resolve_mail_config(&storage)
        .await
        .expect("settings row was not picked up");
    assert_eq!(config.smtp_host, "db.smtp.example.com");
    assert_eq!(config.smtp_port, 465);
    assert!(config.smtp_secure);
    assert_eq!(config.smtp_password, "db-secret");
    assert_eq!(config.admin_email, "db-owner@example.com");

    let _ = std::fs::remove_file(&temp_path);
}

//! Integration tests for the user settings endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_settings_returns_defaults() {
    let app = common::TestApp::new().await;

    let email = unique_email("settings_get");
    app.register_user(&email, "Abcdef12").await;
    let token = app.login(&email, "Abcdef12").await;

    let (status, response) = app.get_auth("/api/v1/configuracoes", &token).await;
    assert_eq!(status, StatusCode::OK, "{}", response);

    let settings: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(settings["moeda"], "BRL");
    assert_eq!(settings["formato_data"], "DD/MM/YYYY");
    assert_eq!(settings["tema"], "auto");
    assert_eq!(settings["notificacoes_email"], true);
    assert_eq!(settings["dia_fechamento_mes"], 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_settings_is_partial() {
    let app = common::TestApp::new().await;

    let email = unique_email("settings_put");
    app.register_user(&email, "Abcdef12").await;
    let token = app.login(&email, "Abcdef12").await;

    let body = json!({ "tema": "escuro", "dia_fechamento_mes": 5 });
    let (status, response) = app
        .put_auth("/api/v1/configuracoes", &token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::OK, "{}", response);

    let settings: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(settings["tema"], "escuro");
    assert_eq!(settings["dia_fechamento_mes"], 5);
    // Untouched fields keep their values
    assert_eq!(settings["moeda"], "BRL");
    assert_eq!(settings["notificacoes_push"], true);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_settings_rejects_bad_closing_day() {
    let app = common::TestApp::new().await;

    let email = unique_email("settings_bad_day");
    app.register_user(&email, "Abcdef12").await;
    let token = app.login(&email, "Abcdef12").await;

    let body = json!({ "dia_fechamento_mes": 32 });
    let (status, _) = app
        .put_auth("/api/v1/configuracoes", &token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_settings_require_authentication() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/configuracoes").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

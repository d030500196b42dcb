//! Integration tests for the onboarding transaction
//!
//! Registration is all-or-nothing: a user, exactly one settings row, and
//! the fixed category seed appear together or not at all.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, Uuid::new_v4())
}

async fn settings_count(pool: &sqlx::PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM user_settings WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn category_count(pool: &sqlx::PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_registration_creates_settings_and_default_categories() {
    let app = common::TestApp::new().await;

    let email = unique_email("onboarding");
    let profile = app.register_user(&email, "Abcdef12").await;
    let user_id = Uuid::parse_str(profile["id"].as_str().unwrap()).unwrap();

    // Exactly one settings row with the fixed defaults
    assert_eq!(settings_count(&app.pool, user_id).await, 1);
    let (currency, date_format, theme, close_day): (String, String, String, i32) =
        sqlx::query_as(
            "SELECT currency, date_format, theme, month_close_day
             FROM user_settings WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(currency, "BRL");
    assert_eq!(date_format, "DD/MM/YYYY");
    assert_eq!(theme, "auto");
    assert_eq!(close_day, 1);

    // The fixed seed: six categories, four expense and two income
    assert_eq!(category_count(&app.pool, user_id).await, 6);
    let expense: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM categories WHERE user_id = $1 AND kind = 'despesa'",
    )
    .bind(user_id)
    .fetch_one(&app.pool)
    .await
    .unwrap();
    assert_eq!(expense, 4);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_registration_does_not_touch_other_users() {
    let app = common::TestApp::new().await;

    let first_email = unique_email("bystander");
    let first = app.register_user(&first_email, "Abcdef12").await;
    let first_id = Uuid::parse_str(first["id"].as_str().unwrap()).unwrap();

    let second_email = unique_email("newcomer");
    app.register_user(&second_email, "Abcdef12").await;

    // The first user's rows are untouched
    assert_eq!(settings_count(&app.pool, first_id).await, 1);
    assert_eq!(category_count(&app.pool, first_id).await, 6);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_failed_registration_leaves_no_partial_rows() {
    let app = common::TestApp::new().await;

    let email = unique_email("atomic");
    let body = json!({
        "email": email,
        "senha": "abcdefg1", // no uppercase: rejected before any write
        "confirmar_senha": "abcdefg1",
        "primeiro_nome": "Ana",
        "ultimo_nome": "Silva"
    });

    let (status, _) = app.post("/api/v1/auth/registrar", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(users, 0);

    // No orphaned settings or categories can exist without the user row:
    // both reference users(id), so zero users implies zero dependents.
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_registration_does_not_duplicate_defaults() {
    let app = common::TestApp::new().await;

    let email = unique_email("dup_defaults");
    let profile = app.register_user(&email, "Abcdef12").await;
    let user_id = Uuid::parse_str(profile["id"].as_str().unwrap()).unwrap();

    let body = json!({
        "email": email,
        "senha": "Abcdef12",
        "confirmar_senha": "Abcdef12",
        "primeiro_nome": "Ana",
        "ultimo_nome": "Silva"
    });
    let (status, _) = app.post("/api/v1/auth/registrar", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(settings_count(&app.pool, user_id).await, 1);
    assert_eq!(category_count(&app.pool, user_id).await, 6);
}

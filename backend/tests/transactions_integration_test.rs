//! Integration tests for the transaction and category endpoints
//!
//! Everything is scoped to the authenticated user: one user's rows are
//! invisible to another, regardless of ids.

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_list_transactions() {
    let app = common::TestApp::new().await;

    let email = unique_email("tx_crud");
    app.register_user(&email, "Abcdef12").await;
    let token = app.login(&email, "Abcdef12").await;

    let body = json!({
        "descricao": "Supermercado",
        "valor": "250.40",
        "tipo_transacao": "despesa",
        "data_transacao": "2026-08-01",
        "etiquetas": ["mercado", "mensal"]
    });
    let (status, response) = app
        .post_auth("/api/v1/transacoes", &token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", response);

    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(created["descricao"], "Supermercado");
    assert_eq!(created["tipo_transacao"], "despesa");
    assert_eq!(created["status"], "concluida");

    let (status, response) = app
        .get_auth("/api/v1/transacoes?tipo=despesa", &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let list: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(list["total_count"], 1);
    assert_eq!(list["items"][0]["id"], created["id"]);
    assert_eq!(list["has_more"], false);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_zero_amount_transaction_is_rejected() {
    let app = common::TestApp::new().await;

    let email = unique_email("tx_zero");
    app.register_user(&email, "Abcdef12").await;
    let token = app.login(&email, "Abcdef12").await;

    let body = json!({
        "descricao": "Nada",
        "valor": "0",
        "tipo_transacao": "despesa",
        "data_transacao": "2026-08-01"
    });
    let (status, _) = app
        .post_auth("/api/v1/transacoes", &token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_transactions_are_user_scoped() {
    let app = common::TestApp::new().await;

    let owner_email = unique_email("tx_owner");
    app.register_user(&owner_email, "Abcdef12").await;
    let owner_token = app.login(&owner_email, "Abcdef12").await;

    let body = json!({
        "descricao": "Particular",
        "valor": "10.00",
        "tipo_transacao": "despesa",
        "data_transacao": "2026-08-01"
    });
    let (_, response) = app
        .post_auth("/api/v1/transacoes", &owner_token, &body.to_string())
        .await;
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = created["id"].as_str().unwrap();

    // Another user cannot see it by id or in listings
    let other_email = unique_email("tx_other");
    app.register_user(&other_email, "Abcdef12").await;
    let other_token = app.login(&other_email, "Abcdef12").await;

    let (status, _) = app
        .get_auth(&format!("/api/v1/transacoes/{}", id), &other_token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, response) = app.get_auth("/api/v1/transacoes", &other_token).await;
    let list: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(list["total_count"], 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_default_categories_are_listed_after_registration() {
    let app = common::TestApp::new().await;

    let email = unique_email("cat_list");
    app.register_user(&email, "Abcdef12").await;
    let token = app.login(&email, "Abcdef12").await;

    let (status, response) = app.get_auth("/api/v1/categorias", &token).await;
    assert_eq!(status, StatusCode::OK);

    let categories: serde_json::Value = serde_json::from_str(&response).unwrap();
    let names: Vec<&str> = categories
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 6);
    assert!(names.contains(&"Alimentação"));
    assert!(names.contains(&"Salário"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_category_soft_delete_hides_from_listing() {
    let app = common::TestApp::new().await;

    let email = unique_email("cat_delete");
    app.register_user(&email, "Abcdef12").await;
    let token = app.login(&email, "Abcdef12").await;

    let body = json!({ "nome": "Assinaturas", "tipo": "despesa", "cor": "#AA00FF" });
    let (status, response) = app
        .post_auth("/api/v1/categorias", &token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", response);
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .delete_auth(&format!("/api/v1/categorias/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Gone from the listing, but the row still exists (soft delete)
    let (_, response) = app.get_auth("/api/v1/categorias", &token).await;
    assert!(!response.contains("Assinaturas"));

    let ativo: bool = sqlx::query_scalar("SELECT ativo FROM categories WHERE id = $1")
        .bind(uuid::Uuid::parse_str(&id).unwrap())
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert!(!ativo);
}

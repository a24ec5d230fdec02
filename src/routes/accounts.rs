use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Account, AccountBalance, AccountCreated, AmountRequest, BalanceChanged, CreateAccount,
};
use crate::services::ledger_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_account).get(list_accounts))
        .route("/:account_id/deposit", post(deposit))
        .route("/:account_id/withdraw", post(withdraw))
        .route("/:account_id/balance", get(get_balance))
}

#[axum::debug_handler]
pub async fn create_account(
    State(state): State<AppState>,
    Json(data): Json<CreateAccount>,
) -> Result<Json<AccountCreated>, AppError> {
    info!("POST /accounts - Creating account");
    let _guard = state.ledger_lock.lock().await;
    let account = ledger_service::create(state.store.as_ref(), data)
        .await
        .map_err(|e| {
            error!("Failed to create account: {}", e);
            e
        })?;
    Ok(Json(AccountCreated {
        message: "Account created successfully".to_string(),
        user: account,
    }))
}

pub async fn deposit(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(data): Json<AmountRequest>,
) -> Result<Json<BalanceChanged>, AppError> {
    info!("POST /accounts/{}/deposit - Depositing funds", account_id);
    let _guard = state.ledger_lock.lock().await;
    let new_balance = ledger_service::deposit(state.store.as_ref(), account_id, data.amount)
        .await
        .map_err(|e| {
            error!("Failed to deposit into account {}: {}", account_id, e);
            e
        })?;
    Ok(Json(BalanceChanged {
        message: "Deposit successful".to_string(),
        new_balance,
    }))
}

pub async fn withdraw(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(data): Json<AmountRequest>,
) -> Result<Json<BalanceChanged>, AppError> {
    info!("POST /accounts/{}/withdraw - Withdrawing funds", account_id);
    let _guard = state.ledger_lock.lock().await;
    let new_balance = ledger_service::withdraw(state.store.as_ref(), account_id, data.amount)
        .await
        .map_err(|e| {
            error!("Failed to withdraw from account {}: {}", account_id, e);
            e
        })?;
    Ok(Json(BalanceChanged {
        message: "Withdrawal successful".to_string(),
        new_balance,
    }))
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountBalance>, AppError> {
    info!("GET /accounts/{}/balance - Fetching balance", account_id);
    let balance = ledger_service::balance(state.store.as_ref(), account_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch balance for account {}: {}", account_id, e);
            e
        })?;
    Ok(Json(balance))
}

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    info!("GET /accounts - Fetching all accounts");
    let accounts = ledger_service::fetch_all(state.store.as_ref()).await;
    Ok(Json(accounts))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::create_app;
    use crate::state::AppState;
    use crate::store::MemoryStore;

    fn test_app() -> axum::Router {
        create_app(AppState::new(Arc::new(MemoryStore::new())))
    }

    async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(value) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn create_account_returns_created_user() {
        let app = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/accounts",
            Some(json!({ "name": "Alice", "initialDeposit": 50.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Account created successfully");
        assert_eq!(body["user"]["name"], "Alice");
        assert_eq!(body["user"]["balance"], 50.0);
        assert!(body["user"]["id"].is_string());
        assert!(body["user"]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn create_account_without_name_is_rejected() {
        let app = test_app();

        let (status, body) = send(&app, "POST", "/api/accounts", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name is required");
    }

    #[tokio::test]
    async fn deposit_returns_new_balance() {
        let app = test_app();
        let (_, created) = send(
            &app,
            "POST",
            "/api/accounts",
            Some(json!({ "name": "Alice" })),
        )
        .await;
        let id = created["user"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/accounts/{}/deposit", id),
            Some(json!({ "amount": 20.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Deposit successful");
        assert_eq!(body["newBalance"], 20.0);
    }

    #[tokio::test]
    async fn deposit_without_amount_is_rejected() {
        let app = test_app();
        let (_, created) = send(
            &app,
            "POST",
            "/api/accounts",
            Some(json!({ "name": "Alice" })),
        )
        .await;
        let id = created["user"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/accounts/{}/deposit", id),
            Some(json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Valid amount is required");
    }

    #[tokio::test]
    async fn withdraw_over_balance_reports_insufficient_funds() {
        let app = test_app();
        let (_, created) = send(
            &app,
            "POST",
            "/api/accounts",
            Some(json!({ "name": "Alice", "initialDeposit": 10.0 })),
        )
        .await;
        let id = created["user"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/accounts/{}/withdraw", id),
            Some(json!({ "amount": 11.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Insufficient funds");

        let (_, balance) = send(&app, "GET", &format!("/api/accounts/{}/balance", id), None).await;
        assert_eq!(balance["balance"], 10.0);
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let app = test_app();
        let ghost = uuid::Uuid::new_v4();

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/accounts/{}/deposit", ghost),
            Some(json!({ "amount": 5.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Account not found");

        let (status, _) = send(&app, "GET", &format!("/api/accounts/{}/balance", ghost), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn balance_returns_name_and_balance() {
        let app = test_app();
        let (_, created) = send(
            &app,
            "POST",
            "/api/accounts",
            Some(json!({ "name": "Bob", "initialDeposit": 75.0 })),
        )
        .await;
        let id = created["user"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", &format!("/api/accounts/{}/balance", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "name": "Bob", "balance": 75.0 }));
    }

    #[tokio::test]
    async fn list_accounts_returns_every_account() {
        let app = test_app();
        send(&app, "POST", "/api/accounts", Some(json!({ "name": "Alice" }))).await;
        send(&app, "POST", "/api/accounts", Some(json!({ "name": "Bob" }))).await;

        let (status, body) = send(&app, "GET", "/api/accounts", None).await;

        assert_eq!(status, StatusCode::OK);
        let accounts = body.as_array().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0]["name"], "Alice");
        assert_eq!(accounts[1]["name"], "Bob");
    }
}

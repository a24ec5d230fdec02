use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Transaction;
use crate::services::transaction_log;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/accounts/:account_id/transactions", get(list_transactions))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    info!("GET /accounts/{}/transactions - Listing transactions", account_id);
    let transactions = transaction_log::fetch_by_account(state.store.as_ref(), account_id).await;
    Ok(Json(transactions))
}

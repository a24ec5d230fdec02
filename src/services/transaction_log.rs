use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Transaction;
use crate::store::{self, RecordStore};

const COLLECTION: &str = "transactions";

// Append rewrites the whole collection; append order is the chronological
// order of balance mutations.
pub async fn append(
    store: &dyn RecordStore,
    transaction: Transaction,
) -> Result<Transaction, AppError> {
    let mut transactions: Vec<Transaction> = store::load(store, COLLECTION).await;
    transactions.push(transaction.clone());
    store::save(store, COLLECTION, &transactions).await?;
    Ok(transaction)
}

pub async fn fetch_by_account(store: &dyn RecordStore, account_id: Uuid) -> Vec<Transaction> {
    store::load::<Transaction>(store, COLLECTION)
        .await
        .into_iter()
        .filter(|t| t.account_id == account_id)
        .collect()
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

// An immutable record of a single deposit or withdrawal. `account_id` is a
// lookup key only; transactions are never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: uuid::Uuid,
    pub account_id: uuid::Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Transaction {
    pub fn new(account_id: uuid::Uuid, kind: TransactionKind, amount: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            account_id,
            kind,
            amount,
            timestamp: chrono::Utc::now(),
        }
    }
}

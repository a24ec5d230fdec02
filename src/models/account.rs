use serde::{Deserialize, Serialize};

// A named balance-holding entity. Field names stay camelCase on the wire
// and in the data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: uuid::Uuid,
    pub name: String,
    pub balance: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub name: Option<String>,
    #[serde(default)]
    pub initial_deposit: Option<f64>,
}

// Body of deposit/withdraw requests. The amount is optional here so a
// missing field surfaces as a domain validation error, not a parse error.
#[derive(Debug, Serialize, Deserialize)]
pub struct AmountRequest {
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AccountCreated {
    pub message: String,
    pub user: Account,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChanged {
    pub message: String,
    pub new_balance: f64,
}

#[derive(Debug, Serialize)]
pub struct AccountBalance {
    pub name: String,
    pub balance: f64,
}

impl Account {
    pub fn new(name: String, opening_balance: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name,
            balance: opening_balance,
            created_at: chrono::Utc::now(),
        }
    }
}

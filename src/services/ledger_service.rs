use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Account, AccountBalance, CreateAccount, Transaction, TransactionKind};
use crate::services::transaction_log;
use crate::store::{self, RecordStore};

const COLLECTION: &str = "accounts";

pub async fn create(store: &dyn RecordStore, input: CreateAccount) -> Result<Account, AppError> {
    let name = input
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;

    // Anything that is not a positive finite number opens the account at 0;
    // creation never fails on the deposit field.
    let opening = input
        .initial_deposit
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(0.0);

    let mut accounts: Vec<Account> = store::load(store, COLLECTION).await;
    let account = Account::new(name, opening);
    accounts.push(account.clone());
    store::save(store, COLLECTION, &accounts).await?;

    if opening > 0.0 {
        transaction_log::append(
            store,
            Transaction::new(account.id, TransactionKind::Deposit, opening),
        )
        .await?;
    }

    Ok(account)
}

pub async fn deposit(
    store: &dyn RecordStore,
    account_id: Uuid,
    amount: Option<f64>,
) -> Result<f64, AppError> {
    let amount = validate_amount(amount)?;

    let mut accounts: Vec<Account> = store::load(store, COLLECTION).await;
    let account = find_mut(&mut accounts, account_id)?;
    account.balance += amount;
    let new_balance = account.balance;
    store::save(store, COLLECTION, &accounts).await?;

    transaction_log::append(
        store,
        Transaction::new(account_id, TransactionKind::Deposit, amount),
    )
    .await?;

    Ok(new_balance)
}

pub async fn withdraw(
    store: &dyn RecordStore,
    account_id: Uuid,
    amount: Option<f64>,
) -> Result<f64, AppError> {
    let amount = validate_amount(amount)?;

    let mut accounts: Vec<Account> = store::load(store, COLLECTION).await;
    let account = find_mut(&mut accounts, account_id)?;
    if amount > account.balance {
        return Err(AppError::InsufficientFunds);
    }
    account.balance -= amount;
    let new_balance = account.balance;
    store::save(store, COLLECTION, &accounts).await?;

    transaction_log::append(
        store,
        Transaction::new(account_id, TransactionKind::Withdrawal, amount),
    )
    .await?;

    Ok(new_balance)
}

pub async fn balance(store: &dyn RecordStore, account_id: Uuid) -> Result<AccountBalance, AppError> {
    let accounts: Vec<Account> = store::load(store, COLLECTION).await;
    let account = accounts
        .iter()
        .find(|a| a.id == account_id)
        .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;
    Ok(AccountBalance {
        name: account.name.clone(),
        balance: account.balance,
    })
}

pub async fn fetch_all(store: &dyn RecordStore) -> Vec<Account> {
    store::load(store, COLLECTION).await
}

fn validate_amount(amount: Option<f64>) -> Result<f64, AppError> {
    match amount {
        Some(a) if a.is_finite() && a > 0.0 => Ok(a),
        _ => Err(AppError::Validation("Valid amount is required".to_string())),
    }
}

fn find_mut(accounts: &mut [Account], account_id: Uuid) -> Result<&mut Account, AppError> {
    accounts
        .iter_mut()
        .find(|a| a.id == account_id)
        .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
}

mod account;
mod transaction;

pub use account::{Account, AccountBalance, AccountCreated, AmountRequest, BalanceChanged, CreateAccount};
pub use transaction::{Transaction, TransactionKind};

pub mod ledger_service;
pub mod transaction_log;

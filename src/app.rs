use axum::Router;

use crate::routes::{accounts, health, transactions};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/accounts", accounts::router())
        .nest("/api", transactions::router())
        .with_state(state)
}

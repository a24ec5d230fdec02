mod app;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::logging::LoggingConfig;
use crate::state::AppState;
use crate::store::FileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    logging::init_logging(&LoggingConfig::from_env());

    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    tracing::info!("💾 Persisting collections under {}/", data_dir);
    let file_store = FileStore::new(data_dir);
    file_store.ensure_dir().await?;

    let state = AppState::new(Arc::new(file_store));
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Minibank backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

mod config;

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use board_api::{AppState, AppStateInner};
use board_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "board=debug,board_api=debug,board_db=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::load()?;

    // A failed connection is logged; the server still starts and the
    // message routes report the failure per request.
    let state: AppState = match config.db_connection_string.as_deref().map(Database::connect) {
        Some(Ok(db)) => {
            info!("Connected to database");
            AppStateInner::connected(db)
        }
        Some(Err(e)) => {
            error!("Failed to connect to database: {:#}", e);
            AppStateInner::disconnected()
        }
        None => AppStateInner::disconnected(),
    };

    let mut app = board_api::router(state).layer(CorsLayer::permissive());
    if config.request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Message board listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

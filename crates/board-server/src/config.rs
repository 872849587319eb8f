use std::env;

use tracing::{info, warn};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_connection_string: Option<String>,
    /// `BOARD_ENV=test` turns off per-request logging.
    pub request_logging: bool,
}

impl Config {
    /// Read once at startup. Call after `.env` has been loaded.
    pub fn load() -> anyhow::Result<Self> {
        let host = var_or("BOARD_HOST", "0.0.0.0");
        let port: u16 = var_or("BOARD_PORT", "3000").parse()?;

        let db_connection_string = env::var("DB_CONNECTION_STRING").ok();
        if db_connection_string.is_none() {
            warn!("DB_CONNECTION_STRING not set, messages will be unavailable");
        }

        let request_logging = env::var("BOARD_ENV").map(|v| v != "test").unwrap_or(true);

        Ok(Self {
            host,
            port,
            db_connection_string,
            request_logging,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

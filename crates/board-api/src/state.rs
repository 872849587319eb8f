use std::sync::Arc;

use board_db::Database;

use crate::error::BoardError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    /// `None` when the startup connection failed. Routes that touch the
    /// store then answer with the downstream failure.
    pub db: Option<Arc<Database>>,
}

impl AppStateInner {
    pub fn connected(db: Database) -> AppState {
        Arc::new(Self {
            db: Some(Arc::new(db)),
        })
    }

    pub fn disconnected() -> AppState {
        Arc::new(Self { db: None })
    }

    /// Run a blocking store call off the async runtime.
    pub async fn with_db<F, T>(&self, f: F) -> Result<T, BoardError>
    where
        F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone().ok_or(BoardError::NotConnected)?;
        let out = tokio::task::spawn_blocking(move || f(db.as_ref())).await??;
        Ok(out)
    }
}

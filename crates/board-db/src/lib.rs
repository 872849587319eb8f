pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::sync::Mutex;
use tracing::info;

pub struct Database {
    conn: Mutex<Connection>,
}

/// Where a connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Memory,
    File(String),
}

impl Target {
    /// Accepts `sqlite://<path>`, `sqlite::memory:`, `:memory:` or a bare path.
    pub fn parse(connection_string: &str) -> Result<Self> {
        let s = connection_string.trim();
        let rest = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);

        match rest {
            "" => anyhow::bail!("Empty database connection string"),
            ":memory:" => Ok(Target::Memory),
            path => Ok(Target::File(path.to_string())),
        }
    }
}

impl Database {
    pub fn connect(connection_string: &str) -> Result<Self> {
        let target = Target::parse(connection_string)?;
        let conn = match &target {
            Target::Memory => Connection::open_in_memory()?,
            Target::File(path) => Connection::open(path)
                .with_context(|| format!("Unable to open database at {}", path))?,
        };

        if matches!(target, Target::File(_)) {
            // WAL mode for concurrent reads
            conn.pragma_update(None, "journal_mode", "WAL")?;
        }

        migrations::run(&conn)?;

        info!("Database connected ({:?})", target);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::connect(":memory:")
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("DB lock poisoned: {}", e))?;
        f(&conn)
    }
}

use crate::Database;
use crate::models::MessageRow;
use anyhow::Result;
use rusqlite::{Connection, Row};
use uuid::Uuid;

impl Database {
    // -- Messages --

    /// Every stored message, oldest first.
    pub fn find_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_all_messages)
    }

    /// Zero or one message. Unknown ids are not an error.
    pub fn find_messages_by_id(&self, id: &str) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| query_messages_by_id(conn, id))
    }

    /// Stores the given fields under a fresh id and returns the stored row.
    pub fn insert_message(&self, name: Option<&str>, message: Option<&str>) -> Result<MessageRow> {
        let id = Uuid::new_v4().to_string();

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, name, message) VALUES (?1, ?2, ?3)",
                rusqlite::params![id, name, message],
            )?;
            Ok(MessageRow {
                id,
                name: name.map(str::to_string),
                message: message.map(str::to_string),
            })
        })
    }
}

fn map_message(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        name: row.get(1)?,
        message: row.get(2)?,
    })
}

fn query_all_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare("SELECT id, name, message FROM messages ORDER BY rowid")?;

    let rows = stmt
        .query_map([], map_message)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_messages_by_id(conn: &Connection, id: &str) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare("SELECT id, name, message FROM messages WHERE id = ?1")?;

    let rows = stmt
        .query_map([id], map_message)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

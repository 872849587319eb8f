use board_types::models::Message;

/// Database row types. These map directly to SQLite rows and stay
/// separate from the board-types wire models.
pub struct MessageRow {
    pub id: String,
    pub name: Option<String>,
    pub message: Option<String>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            name: row.name,
            message: row.message,
        }
    }
}

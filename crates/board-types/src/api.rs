use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Message;

// -- Status strings --

pub const STATUS_OK: &str = "all good";
pub const STATUS_FETCH_FAILED: &str = "failed to retrieve messages from the database";
pub const STATUS_SAVE_FAILED: &str = "failed to save the message to the database";
pub const STATUS_BAD_BODY: &str = "failed to parse the request body";

// -- About us --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutUsContent {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

// -- Messages --

/// Submission body. Fields are kept as raw JSON so that whatever the client
/// sent reaches the store; coercion happens at save time.
#[derive(Debug, Default, Deserialize)]
pub struct SaveMessageRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesEnvelope {
    pub messages: Vec<Message>,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedMessageEnvelope {
    pub message: Message,
    pub status: String,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
    pub status: String,
}

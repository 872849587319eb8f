use serde::{Deserialize, Serialize};

/// A message posted to the board. The database assigns `_id`; the other
/// fields are stored exactly as submitted, so either may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Documents in the `users` collection. No route reads or writes them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let msg = Message {
            id: "abc".into(),
            name: Some("Sam".into()),
            message: None,
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({ "_id": "abc", "name": "Sam" }));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let msg: Message = serde_json::from_str(r#"{"_id":"abc"}"#).unwrap();
        assert_eq!(msg.name, None);
        assert_eq!(msg.message, None);
    }
}

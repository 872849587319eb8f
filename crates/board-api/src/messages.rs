use axum::{
    Form, Json,
    body::Body,
    extract::{FromRequest, Path, Request, State},
    http::header,
};
use serde_json::{Map, Number, Value};
use tracing::debug;

use board_types::api::{
    MessagesEnvelope, STATUS_BAD_BODY, STATUS_FETCH_FAILED, STATUS_OK, STATUS_SAVE_FAILED,
    SaveMessageRequest, SavedMessageEnvelope,
};
use board_types::models::Message;

use crate::error::{BoardError, RouteFailure};
use crate::state::AppState;

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<MessagesEnvelope>, RouteFailure> {
    let rows = state
        .with_db(|db| db.find_messages())
        .await
        .map_err(|e| e.with_status(STATUS_FETCH_FAILED))?;

    Ok(Json(MessagesEnvelope {
        messages: rows.into_iter().map(Message::from).collect(),
        status: STATUS_OK.to_string(),
    }))
}

/// An unknown id yields an empty list with the success status.
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<MessagesEnvelope>, RouteFailure> {
    let rows = state
        .with_db(move |db| db.find_messages_by_id(&message_id))
        .await
        .map_err(|e| e.with_status(STATUS_FETCH_FAILED))?;

    Ok(Json(MessagesEnvelope {
        messages: rows.into_iter().map(Message::from).collect(),
        status: STATUS_OK.to_string(),
    }))
}

pub async fn save_message(
    State(state): State<AppState>,
    MessageBody(req): MessageBody,
) -> Result<Json<SavedMessageEnvelope>, RouteFailure> {
    let fail = |e: BoardError| e.with_status(STATUS_SAVE_FAILED);

    let name = coerce("name", req.name).map_err(fail)?;
    let message = coerce("message", req.message).map_err(fail)?;

    let row = state
        .with_db(move |db| db.insert_message(name.as_deref(), message.as_deref()))
        .await
        .map_err(fail)?;

    debug!("Saved message {}", row.id);

    Ok(Json(SavedMessageEnvelope {
        message: row.into(),
        status: STATUS_OK.to_string(),
    }))
}

/// Lenient scalar-to-text cast. Missing and null stay missing; structured
/// values cannot be stored in a text field.
fn coerce(path: &'static str, value: Option<Value>) -> Result<Option<String>, BoardError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(number_text(&n))),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(BoardError::Cast {
            path,
            value: other.to_string(),
        }),
    }
}

/// Integral floats print without a fractional part (`1.0` is `"1"`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

/// Builds the submission from decoded form pairs. Bracketed keys
/// (`name[first]`) nest into an object and repeated keys collect into an
/// array, so both fail the text cast instead of being dropped.
fn form_fields(pairs: Vec<(String, String)>) -> SaveMessageRequest {
    let mut req = SaveMessageRequest::default();

    for (key, value) in pairs {
        let (field, nested) = match key.split_once('[') {
            Some((field, rest)) => (field, Some(rest.trim_end_matches(']'))),
            None => (key.as_str(), None),
        };

        let slot = match field {
            "name" => &mut req.name,
            "message" => &mut req.message,
            _ => continue,
        };

        let merged = match (slot.take(), nested) {
            (Some(Value::Object(mut map)), Some(sub)) => {
                map.insert(sub.to_string(), Value::String(value));
                Value::Object(map)
            }
            (_, Some(sub)) => {
                let mut map = Map::new();
                map.insert(sub.to_string(), Value::String(value));
                Value::Object(map)
            }
            (None, None) => Value::String(value),
            (Some(Value::Array(mut items)), None) => {
                items.push(Value::String(value));
                Value::Array(items)
            }
            (Some(Value::Object(map)), None) => Value::Object(map),
            (Some(prev), None) => Value::Array(vec![prev, Value::String(value)]),
        };
        *slot = Some(merged);
    }

    req
}

/// Largest body accepted for a submission.
const BODY_LIMIT: usize = 100 * 1024;

/// Submission body, decoded as JSON or form data depending on the
/// content type. An empty body, or any other content type, counts as `{}`.
pub struct MessageBody(pub SaveMessageRequest);

impl<S> FromRequest<S> for MessageBody
where
    S: Send + Sync,
{
    type Rejection = RouteFailure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let malformed = |text: String| BoardError::MalformedBody(text).with_status(STATUS_BAD_BODY);

        let is_json = content_type.starts_with("application/json");
        let is_form = content_type.starts_with("application/x-www-form-urlencoded");
        if !is_json && !is_form {
            return Ok(Self(SaveMessageRequest::default()));
        }

        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| malformed(e.to_string()))?;
        if bytes.is_empty() {
            return Ok(Self(SaveMessageRequest::default()));
        }
        let req = Request::from_parts(parts, Body::from(bytes));

        if is_json {
            let Json(body) = Json::<SaveMessageRequest>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Self(body))
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Self(form_fields(pairs)))
        }
    }
}

pub mod about;
pub mod error;
pub mod messages;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};

pub use state::{AppState, AppStateInner};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/aboutus", get(about::about_us))
        .route("/messages", get(messages::list_messages))
        .route("/messages/save", post(messages::save_message))
        .route("/messages/{message_id}", get(messages::get_message))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use board_db::Database;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppStateInner::connected(Database::open_in_memory().unwrap()))
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::post("/messages/save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn save_then_fetch_by_id() {
        let app = app();

        let (status, saved) = send(&app, post_json(json!({ "name": "Sam", "message": "hello" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["status"], "all good");
        assert_eq!(saved["message"]["name"], "Sam");
        assert_eq!(saved["message"]["message"], "hello");

        let id = saved["message"]["_id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, found) = send(&app, get(&format!("/messages/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["status"], "all good");
        assert_eq!(found["messages"], Value::Array(vec![saved["message"].clone()]));
    }

    #[tokio::test]
    async fn list_contains_every_saved_message() {
        let app = app();
        let mut ids = Vec::new();
        for i in 0..3 {
            let (_, saved) = send(&app, post_json(json!({ "name": "n", "message": i.to_string() }))).await;
            ids.push(saved["message"]["_id"].clone());
        }

        let (status, listed) = send(&app, get("/messages")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["status"], "all good");
        let listed_ids: Vec<Value> = listed["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["_id"].clone())
            .collect();
        for id in &ids {
            assert!(listed_ids.contains(id));
        }
    }

    #[tokio::test]
    async fn unknown_id_is_empty_success() {
        let app = app();
        let (status, body) = send(&app, get("/messages/does-not-exist")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "messages": [], "status": "all good" }));
    }

    #[tokio::test]
    async fn missing_fields_are_saved_anyway() {
        let app = app();

        let (status, saved) = send(&app, post_json(json!({ "message": "no name" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(saved["message"].get("name").is_none());
        assert_eq!(saved["message"]["message"], "no name");

        let empty = Request::post("/messages/save").body(Body::empty()).unwrap();
        let (status, saved) = send(&app, empty).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["message"].as_object().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_body_with_content_type_is_saved() {
        let app = app();

        for content_type in ["application/json", "application/x-www-form-urlencoded"] {
            let req = Request::post("/messages/save")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::empty())
                .unwrap();

            let (status, saved) = send(&app, req).await;
            assert_eq!(status, StatusCode::OK, "content type {content_type}");
            assert_eq!(saved["status"], "all good");
            assert_eq!(saved["message"].as_object().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn integral_floats_saved_without_fraction() {
        let app = app();
        let req = Request::post("/messages/save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":1.0,"message":1e3}"#))
            .unwrap();

        let (status, saved) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["message"]["name"], "1");
        assert_eq!(saved["message"]["message"], "1000");
    }

    #[tokio::test]
    async fn bracketed_form_key_is_a_save_failure() {
        let app = app();
        let req = Request::post("/messages/save")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name[first]=Sam&message=hi"))
            .unwrap();

        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "failed to save the message to the database");
        assert_eq!(body["error"]["name"], "ValidationError");
    }

    #[tokio::test]
    async fn form_encoded_submission() {
        let app = app();
        let req = Request::post("/messages/save")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Sam&message=hello+there"))
            .unwrap();

        let (status, saved) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["message"]["message"], "hello there");
    }

    #[tokio::test]
    async fn structured_field_is_a_save_failure() {
        let app = app();
        let (status, body) = send(&app, post_json(json!({ "name": { "first": "Sam" } }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "failed to save the message to the database");
        assert_eq!(body["error"]["name"], "ValidationError");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = app();
        let req = Request::post("/messages/save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "failed to parse the request body");
    }

    #[tokio::test]
    async fn disconnected_store_reports_failure() {
        let app = router(AppStateInner::disconnected());

        let (status, body) = send(&app, get("/messages")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "failed to retrieve messages from the database");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());

        let (status, body) = send(&app, post_json(json!({ "name": "Sam" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "failed to save the message to the database");
    }

    #[tokio::test]
    async fn about_us_is_fixed() {
        let app = router(AppStateInner::disconnected());

        let (status, first) = send(&app, get("/aboutus")).await;
        assert_eq!(status, StatusCode::OK);
        let (_, second) = send(&app, get("/aboutus?lang=fr")).await;
        assert_eq!(first, second);
        assert_eq!(first["title"], "About Us");
        assert!(first["imageUrl"].as_str().unwrap().starts_with("https://"));
    }
}

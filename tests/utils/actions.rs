use axum::{
    body::Body,
    http::{Request, Response},
};
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

// ============================================================================
// Request Helpers
// ============================================================================

impl TestSetup {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn create_room(&self, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/rooms")
            .header("content-type", "text/plain")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn join_room(&self, room_id: &str) -> Response<Body> {
        self.get(&format!("/api/v1/rooms/{}", room_id)).await
    }

    pub async fn get_messages(&self, room_id: &str, query: &str) -> Response<Body> {
        let uri = if query.is_empty() {
            format!("/api/v1/rooms/{}/message", room_id)
        } else {
            format!("/api/v1/rooms/{}/message?{}", room_id, query)
        };
        self.get(&uri).await
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }
}

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::room;
use crate::shared::AppState;

/// Builds the HTTP router with CORS restricted to `cors_origin`
pub fn build_router(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/v1/rooms", post(room::create_room))
        .route("/api/v1/rooms/:room_id", get(room::join_room))
        .route("/api/v1/rooms/:room_id/message", get(room::get_messages))
        // Path used by the web client
        .route("/api/v1/rooms/:room_id/messages", get(room::get_messages))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::room::repository::RoomRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub room_repository: Arc<dyn RoomRepository + Send + Sync>,
}

impl AppState {
    pub fn new(room_repository: Arc<dyn RoomRepository + Send + Sync>) -> Self {
        Self { room_repository }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Client errors carry the bare message as a JSON string
            AppError::Conflict(msg) | AppError::NotFound(msg) | AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(msg)).into_response()
            }
            AppError::DatabaseError(msg) => {
                error!(error = %msg, "Room store unavailable");
                let body = Json(json!({
                    "error": format!("Database error: {}", msg)
                }));
                (StatusCode::SERVICE_UNAVAILABLE, body).into_response()
            }
        }
    }
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::RoomModel,
    pagination::PageQuery,
    service::RoomService,
    types::parse_room_id,
};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a new room
///
/// POST /api/v1/rooms
/// Body is the room identifier; returns 201 with the new room
#[instrument(name = "create_room", skip(state, body))]
pub async fn create_room(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<RoomModel>), AppError> {
    let room_id = parse_room_id(&body)?;
    info!(room_id = %room_id, "Creating new room");

    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.create_room(room_id).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// HTTP handler for joining a room
///
/// GET /api/v1/rooms/:room_id
/// Returns the room with its full message history
#[instrument(name = "join_room", skip(state))]
pub async fn join_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomModel>, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.join_room(&room_id).await?;

    Ok(Json(room))
}

/// HTTP handler for fetching paginated room history
///
/// GET /api/v1/rooms/:room_id/message?page=&size=
/// Page 0 holds the newest messages. An unknown room answers 400 with a null body.
#[instrument(name = "get_messages", skip(state))]
pub async fn get_messages(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    match service.get_messages(&room_id, query).await {
        Ok(messages) => Ok(Json(messages).into_response()),
        Err(AppError::NotFound(_)) => {
            info!(room_id = %room_id, "Messages requested for unknown room");
            Ok((StatusCode::BAD_REQUEST, Json(Value::Null)).into_response())
        }
        Err(e) => Err(e),
    }
}

use serde::Deserialize;
use serde_json::Value;

use crate::shared::AppError;

/// JSON object form of the create-room payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoomCreateRequest {
    room_id: String,
}

/// Extracts the room identifier from a create-room body
///
/// Accepts `{"roomId": "..."}`, a JSON string, or the bare identifier as text.
pub fn parse_room_id(body: &str) -> Result<String, AppError> {
    let trimmed = body.trim();

    let room_id = match serde_json::from_str::<Value>(trimmed) {
        Ok(object @ Value::Object(_)) => serde_json::from_value::<RoomCreateRequest>(object)
            .map_err(|_| AppError::Validation("roomId must be a string".to_string()))?
            .room_id,
        Ok(Value::String(value)) => value,
        // Anything else, numbers included, is the identifier itself
        _ => trimmed.to_string(),
    };

    let room_id = room_id.trim();
    if room_id.is_empty() {
        return Err(AppError::Validation("Room id is required".to_string()));
    }
    Ok(room_id.to_string())
}

use async_trait::async_trait;

use chatroom::{AppError, RoomModel, RoomRepository};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Room store that is always unreachable
pub struct FailingRoomRepository;

#[async_trait]
impl RoomRepository for FailingRoomRepository {
    async fn find_by_room_id(&self, _room_id: &str) -> Result<Option<RoomModel>, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn save(&self, _room: &RoomModel) -> Result<RoomModel, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}

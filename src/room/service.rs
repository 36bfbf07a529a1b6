use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::{MessageModel, RoomModel},
    pagination::{page_slice, PageQuery, PageRequest},
    repository::RoomRepository,
};
use crate::shared::AppError;

pub const ROOM_EXISTS: &str = "Room already exists";
pub const ROOM_MISSING: &str = "Room does not exist";

/// Service for handling room business logic
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
}

impl RoomService {
    pub fn new(repository: Arc<dyn RoomRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates a new empty room under `room_id`
    ///
    /// Returns the room as built before saving, so its `id` is unset.
    #[instrument(skip(self))]
    pub async fn create_room(&self, room_id: String) -> Result<RoomModel, AppError> {
        if self.repository.find_by_room_id(&room_id).await?.is_some() {
            warn!(room_id = %room_id, "Room already exists");
            return Err(AppError::Conflict(ROOM_EXISTS.to_string()));
        }

        let room = RoomModel::new(room_id);
        let saved = self.repository.save(&room).await?;
        debug!(room_id = %room.room_id, id = ?saved.id, "Room persisted");

        info!(room_id = %room.room_id, "Room created successfully");
        Ok(room)
    }

    /// Fetches the full room, history included. Creates no membership state.
    #[instrument(skip(self))]
    pub async fn join_room(&self, room_id: &str) -> Result<RoomModel, AppError> {
        let room = self
            .repository
            .find_by_room_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_MISSING.to_string()))?;

        info!(
            room_id = %room_id,
            message_count = room.message_count(),
            "Room joined"
        );
        Ok(room)
    }

    /// Returns one page of history, newest page first, oldest-first within the page
    ///
    /// The room lookup happens before the query is validated, so an unknown
    /// room is always `NotFound` whatever the paging parameters.
    #[instrument(skip(self))]
    pub async fn get_messages(
        &self,
        room_id: &str,
        query: PageQuery,
    ) -> Result<Vec<MessageModel>, AppError> {
        let room = self
            .repository
            .find_by_room_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_MISSING.to_string()))?;
        let request = PageRequest::try_from(query)?;

        let page = page_slice(&room.messages, request).to_vec();
        debug!(
            room_id = %room_id,
            total = room.message_count(),
            returned = page.len(),
            "Messages paginated"
        );
        Ok(page)
    }
}

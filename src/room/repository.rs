use async_trait::async_trait;
use sqlx::{types::Json, PgPool, Row};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::models::{MessageModel, RoomModel};
use crate::shared::AppError;

/// Trait for room store operations
///
/// Implementations enforce `room_id` uniqueness: saving a new room whose
/// `room_id` is already taken fails with `AppError::Conflict`.
#[async_trait]
pub trait RoomRepository {
    /// Point lookup by room identifier. A miss is `Ok(None)`, not an error.
    async fn find_by_room_id(&self, room_id: &str) -> Result<Option<RoomModel>, AppError>;

    /// Inserts a new room or replaces an existing one, returning the stored
    /// representation (including the assigned `id`).
    async fn save(&self, room: &RoomModel) -> Result<RoomModel, AppError>;
}

fn assign_id(room: &RoomModel) -> RoomModel {
    let mut stored = room.clone();
    if stored.id.is_none() {
        stored.id = Some(Uuid::new_v4().to_string());
    }
    stored
}

/// In-memory implementation of RoomRepository for development and testing
///
/// Data is stored in memory and will be lost when the application restarts.
pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<String, RoomModel>>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the current number of rooms in the repository
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_room_id(&self, room_id: &str) -> Result<Option<RoomModel>, AppError> {
        debug!(room_id = %room_id, "Fetching room from memory");

        let rooms = self.rooms.read().await;
        let room = rooms.get(room_id).cloned();

        match &room {
            Some(r) => {
                debug!(room_id = %room_id, message_count = r.message_count(), "Room found in memory")
            }
            None => debug!(room_id = %room_id, "Room not found in memory"),
        }

        Ok(room)
    }

    #[instrument(skip(self, room), fields(room_id = %room.room_id))]
    async fn save(&self, room: &RoomModel) -> Result<RoomModel, AppError> {
        debug!("Saving room in memory");

        let mut rooms = self.rooms.write().await;
        if let Some(existing) = rooms.get(&room.room_id) {
            if room.id.is_none() || existing.id != room.id {
                warn!("Room id already taken in memory");
                return Err(AppError::Conflict("Room already exists".to_string()));
            }
        }

        let stored = assign_id(room);
        rooms.insert(stored.room_id.clone(), stored.clone());

        debug!(id = ?stored.id, "Room saved successfully in memory");
        Ok(stored)
    }
}

/// Unique-violation SQLSTATE raised by Postgres
const UNIQUE_VIOLATION: &str = "23505";

/// Maps a failed statement to the error surfaced by the gateway, given the
/// SQLSTATE code the database reported (if any)
fn classify_db_error(code: Option<&str>, message: String) -> AppError {
    match code {
        Some(UNIQUE_VIOLATION) => AppError::Conflict("Room already exists".to_string()),
        _ => AppError::DatabaseError(message),
    }
}

fn map_sqlx_error(e: sqlx::Error) -> AppError {
    let code = e
        .as_database_error()
        .and_then(|db_err| db_err.code().map(|c| c.into_owned()));
    classify_db_error(code.as_deref(), e.to_string())
}

/// PostgreSQL implementation of room repository
///
/// Each room is one row; its message history is kept as a JSONB document.
pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the rooms table if it does not exist yet
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS rooms (id TEXT PRIMARY KEY, room_id TEXT NOT NULL UNIQUE, messages JSONB NOT NULL DEFAULT '[]'::jsonb)"
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create rooms table");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!("Rooms table ready");
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_room_id(&self, room_id: &str) -> Result<Option<RoomModel>, AppError> {
        debug!(room_id = %room_id, "Fetching room from database");

        let row = sqlx::query("SELECT id, room_id, messages FROM rooms WHERE room_id = $1")
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, room_id = %room_id, "Failed to fetch room from database");
                AppError::DatabaseError(e.to_string())
            })?;

        let Some(row) = row else {
            debug!(room_id = %room_id, "Room not found in database");
            return Ok(None);
        };

        let messages: Json<Vec<MessageModel>> = row
            .try_get("messages")
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        let room = RoomModel {
            id: row
                .try_get("id")
                .map_err(|e| AppError::DatabaseError(e.to_string()))?,
            room_id: row
                .try_get("room_id")
                .map_err(|e| AppError::DatabaseError(e.to_string()))?,
            messages: messages.0,
        };

        debug!(room_id = %room_id, message_count = room.message_count(), "Room found in database");
        Ok(Some(room))
    }

    #[instrument(skip(self, room), fields(room_id = %room.room_id))]
    async fn save(&self, room: &RoomModel) -> Result<RoomModel, AppError> {
        debug!("Saving room in database");

        let stored = assign_id(room);

        // A clash on room_id under a different id surfaces as a unique violation
        sqlx::query(
            "INSERT INTO rooms (id, room_id, messages) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET messages = EXCLUDED.messages",
        )
        .bind(&stored.id)
        .bind(&stored.room_id)
        .bind(Json(&stored.messages))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to save room in database");
            map_sqlx_error(e)
        })?;

        debug!(id = ?stored.id, "Room saved successfully in database");
        Ok(stored)
    }
}

use axum::{http::HeaderValue, Router};
use std::sync::Arc;

use chatroom::{
    build_router, AppState, InMemoryRoomRepository, MessageModel, RoomModel, RoomRepository,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub struct TestSetup {
    pub app: Router,
    pub repository: Arc<dyn RoomRepository + Send + Sync>,
}

pub struct TestSetupBuilder {
    rooms: Vec<(String, usize)>,
    repository: Option<Arc<dyn RoomRepository + Send + Sync>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            rooms: vec![],
            repository: None,
        }
    }

    /// Seeds a room whose history is "m0".."m{message_count-1}", oldest first
    pub fn with_room(mut self, room_id: &str, message_count: usize) -> Self {
        self.rooms.push((room_id.to_string(), message_count));
        self
    }

    pub fn with_repository(mut self, repository: Arc<dyn RoomRepository + Send + Sync>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub async fn build(self) -> TestSetup {
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryRoomRepository::new()));

        for (room_id, count) in &self.rooms {
            let mut room = RoomModel::new(room_id.as_str());
            room.messages = (0..*count)
                .map(|i| MessageModel::new(format!("user-{}", i % 3), format!("m{}", i)))
                .collect();
            repository.save(&room).await.unwrap();
        }

        let app = build_router(
            AppState::new(repository.clone()),
            HeaderValue::from_static(TEST_ORIGIN),
        );

        TestSetup { app, repository }
    }
}

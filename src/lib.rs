// Library crate for the chat room server
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod room;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::build_router;
pub use config::{AppConfig, ConfigError};
pub use room::{
    models::{MessageModel, RoomModel},
    repository::{InMemoryRoomRepository, PostgresRoomRepository, RoomRepository},
};
pub use shared::{AppError, AppState};

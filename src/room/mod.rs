// Public API - what other modules can use
pub use handlers::{create_room, get_messages, join_room};

// Internal modules
mod handlers;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod service;
mod types;

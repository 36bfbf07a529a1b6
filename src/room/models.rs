use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat entry. Owned by exactly one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageModel {
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl MessageModel {
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Room document as stored in the rooms collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomModel {
    pub id: Option<String>,         // Store-assigned, None until first save
    pub room_id: String,            // Natural key chosen by the client
    pub messages: Vec<MessageModel>, // Oldest first
}

impl RoomModel {
    /// Creates an unsaved room with an empty history
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            id: None,
            room_id: room_id.into(),
            messages: Vec::new(),
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

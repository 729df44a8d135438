//! Typed request/response shapes of the backend services
//!
//! These mirror the wire schemas owned by the user and item services; the
//! gateway only moves them between JSON and the RPC channel.

mod item;
mod user;

pub use item::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Plain confirmation payload for operations with no entity to return
/// (deletes and similar).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

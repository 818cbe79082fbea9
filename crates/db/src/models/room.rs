//! Room entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::lifecycle::Lifecycle;

/// A row from the `rooms` table.
///
/// `capacity` doubles as the optimistic-concurrency comparison field: the
/// guard's conditional update compares against the value it read rather
/// than a separate version column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub gym_id: DbId,
    pub capacity: i32,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub gym_id: DbId,
    pub capacity: i32,
}

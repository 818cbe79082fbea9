//! Room ↔ class-type junction model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::lifecycle::Lifecycle;

/// A row from the `room_class_types` table: one (room, class type) pairing
/// under which sessions are scheduled.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomClassType {
    pub id: DbId,
    pub room_id: DbId,
    pub class_type_id: DbId,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for linking a room to a class type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomClassType {
    pub room_id: DbId,
    pub class_type_id: DbId,
}

//! Class-session entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::lifecycle::Lifecycle;

/// A row from the `class_sessions` table: one bookable occurrence of a
/// (room, class type) pairing.
///
/// `capacity` is kept synchronized with the owning room's capacity for
/// sessions that have not yet occurred.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassSession {
    pub id: DbId,
    pub room_class_type_id: DbId,
    pub trainer_id: Option<DbId>,
    pub capacity: i32,
    pub starts_at: Timestamp,
    pub duration_mins: i32,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling a new session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassSession {
    pub room_class_type_id: DbId,
    pub trainer_id: Option<DbId>,
    pub capacity: i32,
    pub starts_at: Timestamp,
    pub duration_mins: i32,
}

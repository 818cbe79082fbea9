//! Attendance entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::lifecycle::Lifecycle;
use crate::models::status::AttendanceStatus;

/// A row from the `attendances` table: one client's booking against one
/// session.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub class_session_id: DbId,
    pub client_id: DbId,
    pub status: AttendanceStatus,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for booking a client onto a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendance {
    pub class_session_id: DbId,
    pub client_id: DbId,
    /// Defaults to `booked` if omitted.
    pub status: Option<AttendanceStatus>,
}

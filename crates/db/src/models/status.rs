//! Status enums for attendance and membership rows.
//!
//! Both are stored as PostgreSQL enum types (`attendance_status`,
//! `membership_status`). Memberships have no tombstone column; the status
//! enum is their entire lifecycle.

use serde::{Deserialize, Serialize};

/// Status of an attendance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "attendance_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Booked,
    Attended,
    Missed,
    Cancelled,
}

impl AttendanceStatus {
    /// Active rows count against room and session capacity.
    pub fn is_active(self) -> bool {
        matches!(self, AttendanceStatus::Booked | AttendanceStatus::Attended)
    }
}

/// Status of a membership row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "membership_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Expired,
    Frozen,
    Cancelled,
}

impl MembershipStatus {
    /// Terminal memberships are never transitioned by a class-type
    /// retirement.
    pub fn is_terminal(self) -> bool {
        matches!(self, MembershipStatus::Expired | MembershipStatus::Cancelled)
    }
}

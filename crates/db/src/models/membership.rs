//! Membership entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::status::MembershipStatus;

/// A row from the `memberships` table.
///
/// Memberships sit outside the room/session tree and carry no tombstone
/// column; retiring their class type freezes them instead of deleting
/// them, preserving billing history.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Membership {
    pub id: DbId,
    pub client_id: DbId,
    pub class_type_id: DbId,
    pub status: MembershipStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new membership.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMembership {
    pub client_id: DbId,
    pub class_type_id: DbId,
    /// Defaults to `active` if omitted.
    pub status: Option<MembershipStatus>,
}

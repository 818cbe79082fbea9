//! Gym entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::lifecycle::Lifecycle;

/// A row from the `gyms` table. Root of the facility hierarchy.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gym {
    pub id: DbId,
    pub address: String,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gym.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGym {
    pub address: String,
}

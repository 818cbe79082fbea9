//! Trainer staffing join models: qualifications and gym placements.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::lifecycle::Lifecycle;

/// A row from the `qualifications` table: a trainer certified for a class
/// type. Tombstoned alongside its class type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Qualification {
    pub id: DbId,
    pub trainer_id: DbId,
    pub class_type_id: DbId,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a qualification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQualification {
    pub trainer_id: DbId,
    pub class_type_id: DbId,
}

/// A row from the `trainer_placements` table: a trainer assigned to a gym.
/// Tombstoned alongside its gym.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainerPlacement {
    pub id: DbId,
    pub gym_id: DbId,
    pub trainer_id: DbId,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for placing a trainer at a gym.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrainerPlacement {
    pub gym_id: DbId,
    pub trainer_id: DbId,
}

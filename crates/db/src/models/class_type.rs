//! Class-type entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gymdesk_core::types::{DbId, Timestamp};

use crate::models::lifecycle::Lifecycle;

/// A row from the `class_types` table (e.g. "Yoga, beginner").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub level: String,
    #[sqlx(rename = "deleted")]
    #[serde(rename = "deleted")]
    pub state: Lifecycle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new class type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassType {
    pub name: String,
    pub description: Option<String>,
    pub level: String,
}

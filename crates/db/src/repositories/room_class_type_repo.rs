//! Repository for the `room_class_types` junction table.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::room_class_type::{CreateRoomClassType, RoomClassType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_id, class_type_id, deleted, created_at, updated_at";

/// Provides persistence operations for room ↔ class-type links.
pub struct RoomClassTypeRepo;

impl RoomClassTypeRepo {
    /// Link a room to a class type, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateRoomClassType,
    ) -> Result<RoomClassType, sqlx::Error> {
        let query = format!(
            "INSERT INTO room_class_types (room_id, class_type_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomClassType>(&query)
            .bind(input.room_id)
            .bind(input.class_type_id)
            .fetch_one(exec)
            .await
    }

    /// List all live links for a room.
    pub async fn list_by_room(
        exec: impl PgExecutor<'_>,
        room_id: DbId,
    ) -> Result<Vec<RoomClassType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_class_types
             WHERE room_id = $1 AND NOT deleted
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, RoomClassType>(&query)
            .bind(room_id)
            .fetch_all(exec)
            .await
    }

    /// Tombstone every live link for a room. Returns the rows affected.
    pub async fn tombstone_by_room(
        exec: impl PgExecutor<'_>,
        room_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE room_class_types SET deleted = TRUE, updated_at = NOW()
             WHERE room_id = $1 AND NOT deleted",
        )
        .bind(room_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }

    /// Tombstone every live link referencing a class type. Returns the
    /// rows affected.
    pub async fn tombstone_by_class_type(
        exec: impl PgExecutor<'_>,
        class_type_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE room_class_types SET deleted = TRUE, updated_at = NOW()
             WHERE class_type_id = $1 AND NOT deleted",
        )
        .bind(class_type_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }
}

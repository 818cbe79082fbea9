//! Repository for the `rooms` table, including the conditional capacity
//! write used by the capacity guard.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::room::{CreateRoom, Room};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, gym_id, capacity, deleted, created_at, updated_at";

/// Provides persistence operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateRoom,
    ) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (gym_id, capacity) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(input.gym_id)
            .bind(input.capacity)
            .fetch_one(exec)
            .await
    }

    /// Find a room by its internal ID. Excludes tombstoned rows.
    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1 AND NOT deleted");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Find a room by ID, including tombstoned rows.
    pub async fn find_by_id_include_deleted(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List all live rooms owned by a gym, ordered by creation time.
    pub async fn list_by_gym(
        exec: impl PgExecutor<'_>,
        gym_id: DbId,
    ) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms
             WHERE gym_id = $1 AND NOT deleted
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(gym_id)
            .fetch_all(exec)
            .await
    }

    /// Tombstone a room. Returns `true` if a live row was marked deleted.
    pub async fn tombstone(exec: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE rooms SET deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND NOT deleted",
        )
        .bind(id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Compare-and-swap the capacity column.
    ///
    /// Writes `new_capacity` only if the persisted capacity still equals
    /// `expected`; the capacity column itself is the comparison field, so
    /// no version column is needed. Returns the number of rows affected
    /// (0 means the precondition failed and another writer won the race).
    pub async fn cas_update_capacity(
        exec: impl PgExecutor<'_>,
        id: DbId,
        expected: i32,
        new_capacity: i32,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE rooms SET capacity = $3, updated_at = NOW()
             WHERE id = $1 AND capacity = $2 AND NOT deleted",
        )
        .bind(id)
        .bind(expected)
        .bind(new_capacity)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }
}

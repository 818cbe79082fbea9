//! Repository for the `class_sessions` table.
//!
//! Besides CRUD, this holds the bulk statements the cascade coordinator
//! and capacity guard need: tombstoning whole subtrees by room or class
//! type, per-session active-booking counts, and future-session capacity
//! propagation.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::class_session::{ClassSession, CreateClassSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_class_type_id, trainer_id, capacity, starts_at, \
    duration_mins, deleted, created_at, updated_at";

/// Per-session count of active (booked or attended) attendance rows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionActiveCount {
    pub session_id: DbId,
    pub active_count: i64,
}

/// Provides persistence operations for class sessions.
pub struct ClassSessionRepo;

impl ClassSessionRepo {
    /// Schedule a new session, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateClassSession,
    ) -> Result<ClassSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO class_sessions
                (room_class_type_id, trainer_id, capacity, starts_at, duration_mins)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(input.room_class_type_id)
            .bind(input.trainer_id)
            .bind(input.capacity)
            .bind(input.starts_at)
            .bind(input.duration_mins)
            .fetch_one(exec)
            .await
    }

    /// Find a session by ID, including tombstoned rows.
    pub async fn find_by_id_include_deleted(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<ClassSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM class_sessions WHERE id = $1");
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List all live sessions scheduled in a room, ordered by start time.
    pub async fn list_by_room(
        exec: impl PgExecutor<'_>,
        room_id: DbId,
    ) -> Result<Vec<ClassSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM class_sessions
             WHERE NOT deleted
               AND room_class_type_id IN
                   (SELECT id FROM room_class_types WHERE room_id = $1)
             ORDER BY starts_at ASC"
        );
        sqlx::query_as::<_, ClassSession>(&query)
            .bind(room_id)
            .fetch_all(exec)
            .await
    }

    /// Tombstone every live session scheduled in a room. Returns the rows
    /// affected.
    ///
    /// The link subquery deliberately ignores the links' own tombstone
    /// flag: during a cascade the links are tombstoned first, and their
    /// sessions must still be found.
    pub async fn tombstone_by_room(
        exec: impl PgExecutor<'_>,
        room_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE class_sessions SET deleted = TRUE, updated_at = NOW()
             WHERE NOT deleted
               AND room_class_type_id IN
                   (SELECT id FROM room_class_types WHERE room_id = $1)",
        )
        .bind(room_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }

    /// Tombstone every live session scheduled under a class type's links.
    /// Returns the rows affected.
    pub async fn tombstone_by_class_type(
        exec: impl PgExecutor<'_>,
        class_type_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE class_sessions SET deleted = TRUE, updated_at = NOW()
             WHERE NOT deleted
               AND room_class_type_id IN
                   (SELECT id FROM room_class_types WHERE class_type_id = $1)",
        )
        .bind(class_type_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count active (booked or attended) attendance rows per future
    /// session of a room.
    ///
    /// Only live sessions starting after the database clock's `NOW()` are
    /// scanned; tombstoned attendance rows never count.
    pub async fn future_active_counts(
        exec: impl PgExecutor<'_>,
        room_id: DbId,
    ) -> Result<Vec<SessionActiveCount>, sqlx::Error> {
        sqlx::query_as::<_, SessionActiveCount>(
            "SELECT s.id AS session_id, COUNT(a.id) AS active_count
             FROM class_sessions s
             JOIN room_class_types rct ON rct.id = s.room_class_type_id
             LEFT JOIN attendances a
               ON a.class_session_id = s.id
              AND NOT a.deleted
              AND a.status IN ('booked', 'attended')
             WHERE rct.room_id = $1
               AND NOT s.deleted
               AND s.starts_at > NOW()
             GROUP BY s.id
             ORDER BY s.starts_at ASC",
        )
        .bind(room_id)
        .fetch_all(exec)
        .await
    }

    /// Bulk-write `capacity` onto every live future session of a room.
    /// Past sessions keep the capacity they ran with. Returns the rows
    /// affected.
    pub async fn propagate_capacity(
        exec: impl PgExecutor<'_>,
        room_id: DbId,
        capacity: i32,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE class_sessions SET capacity = $2, updated_at = NOW()
             WHERE NOT deleted
               AND starts_at > NOW()
               AND room_class_type_id IN
                   (SELECT id FROM room_class_types WHERE room_id = $1)",
        )
        .bind(room_id)
        .bind(capacity)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the `attendances` table.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::attendance::{Attendance, CreateAttendance};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, class_session_id, client_id, status, deleted, \
    created_at, updated_at";

/// Provides persistence operations for attendance rows.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Book a client onto a session, returning the created row.
    ///
    /// If `status` is `None`, defaults to `booked`.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateAttendance,
    ) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendances (class_session_id, client_id, status)
             VALUES ($1, $2, COALESCE($3, 'booked'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(input.class_session_id)
            .bind(input.client_id)
            .bind(input.status)
            .fetch_one(exec)
            .await
    }

    /// List every attendance row for a session, tombstoned rows included.
    /// Cascade tests use this to verify cancelled bookings are retained.
    pub async fn list_by_session_include_deleted(
        exec: impl PgExecutor<'_>,
        class_session_id: DbId,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendances
             WHERE class_session_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(class_session_id)
            .fetch_all(exec)
            .await
    }

    /// Cancel and tombstone every live attendance row under a room's
    /// sessions. Returns the rows affected.
    pub async fn cancel_by_room(
        exec: impl PgExecutor<'_>,
        room_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attendances SET status = 'cancelled', deleted = TRUE, updated_at = NOW()
             WHERE NOT deleted
               AND class_session_id IN
                   (SELECT s.id FROM class_sessions s
                    JOIN room_class_types rct ON rct.id = s.room_class_type_id
                    WHERE rct.room_id = $1)",
        )
        .bind(room_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }

    /// Cancel and tombstone every live attendance row under a class type's
    /// sessions. Returns the rows affected.
    pub async fn cancel_by_class_type(
        exec: impl PgExecutor<'_>,
        class_type_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attendances SET status = 'cancelled', deleted = TRUE, updated_at = NOW()
             WHERE NOT deleted
               AND class_session_id IN
                   (SELECT s.id FROM class_sessions s
                    JOIN room_class_types rct ON rct.id = s.room_class_type_id
                    WHERE rct.class_type_id = $1)",
        )
        .bind(class_type_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the `memberships` table.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::membership::{CreateMembership, Membership};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, class_type_id, status, created_at, updated_at";

/// Provides persistence operations for memberships.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Insert a new membership, returning the created row.
    ///
    /// If `status` is `None`, defaults to `active`.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateMembership,
    ) -> Result<Membership, sqlx::Error> {
        let query = format!(
            "INSERT INTO memberships (client_id, class_type_id, status)
             VALUES ($1, $2, COALESCE($3, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(input.client_id)
            .bind(input.class_type_id)
            .bind(input.status)
            .fetch_one(exec)
            .await
    }

    /// Find a membership by its internal ID.
    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memberships WHERE id = $1");
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// List every membership referencing a class type.
    pub async fn list_by_class_type(
        exec: impl PgExecutor<'_>,
        class_type_id: DbId,
    ) -> Result<Vec<Membership>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM memberships
             WHERE class_type_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(class_type_id)
            .fetch_all(exec)
            .await
    }

    /// Move every non-terminal membership referencing a class type to
    /// `frozen`. Terminal rows (`expired`, `cancelled`) keep their status;
    /// memberships are never tombstoned. Returns the rows affected.
    pub async fn freeze_by_class_type(
        exec: impl PgExecutor<'_>,
        class_type_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE memberships SET status = 'frozen', updated_at = NOW()
             WHERE class_type_id = $1
               AND status NOT IN ('expired', 'cancelled', 'frozen')",
        )
        .bind(class_type_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }
}

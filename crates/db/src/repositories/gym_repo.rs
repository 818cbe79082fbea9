//! Repository for the `gyms` table.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::gym::{CreateGym, Gym};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, address, deleted, created_at, updated_at";

/// Provides persistence operations for gyms.
///
/// Every method takes an executor so the same call works against the pool
/// or inside a caller-owned transaction; no method commits on its own.
pub struct GymRepo;

impl GymRepo {
    /// Insert a new gym, returning the created row.
    pub async fn create(exec: impl PgExecutor<'_>, input: &CreateGym) -> Result<Gym, sqlx::Error> {
        let query = format!("INSERT INTO gyms (address) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Gym>(&query)
            .bind(&input.address)
            .fetch_one(exec)
            .await
    }

    /// Find a gym by its internal ID. Excludes tombstoned rows.
    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Gym>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gyms WHERE id = $1 AND NOT deleted");
        sqlx::query_as::<_, Gym>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Find a gym by ID, including tombstoned rows. Used by the cascade
    /// coordinator to distinguish "missing" from "already retired".
    pub async fn find_by_id_include_deleted(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Gym>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gyms WHERE id = $1");
        sqlx::query_as::<_, Gym>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Tombstone a gym. Returns `true` if a live row was marked deleted.
    pub async fn tombstone(exec: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE gyms SET deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND NOT deleted",
        )
        .bind(id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `class_types` table.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::class_type::{ClassType, CreateClassType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, level, deleted, created_at, updated_at";

/// Provides persistence operations for class types.
pub struct ClassTypeRepo;

impl ClassTypeRepo {
    /// Insert a new class type, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateClassType,
    ) -> Result<ClassType, sqlx::Error> {
        let query = format!(
            "INSERT INTO class_types (name, description, level)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.level)
            .fetch_one(exec)
            .await
    }

    /// Find a class type by its internal ID. Excludes tombstoned rows.
    pub async fn find_by_id(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<ClassType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM class_types WHERE id = $1 AND NOT deleted");
        sqlx::query_as::<_, ClassType>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Find a class type by ID, including tombstoned rows.
    pub async fn find_by_id_include_deleted(
        exec: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<ClassType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM class_types WHERE id = $1");
        sqlx::query_as::<_, ClassType>(&query)
            .bind(id)
            .fetch_optional(exec)
            .await
    }

    /// Tombstone a class type. Returns `true` if a live row was marked
    /// deleted.
    pub async fn tombstone(exec: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE class_types SET deleted = TRUE, updated_at = NOW()
             WHERE id = $1 AND NOT deleted",
        )
        .bind(id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

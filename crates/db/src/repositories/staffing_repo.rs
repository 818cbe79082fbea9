//! Repositories for the trainer staffing join tables: `qualifications`
//! and `trainer_placements`.

use sqlx::PgExecutor;

use gymdesk_core::types::DbId;

use crate::models::staffing::{
    CreateQualification, CreateTrainerPlacement, Qualification, TrainerPlacement,
};

const QUALIFICATION_COLUMNS: &str = "id, trainer_id, class_type_id, deleted, \
    created_at, updated_at";

const PLACEMENT_COLUMNS: &str = "id, gym_id, trainer_id, deleted, created_at, updated_at";

/// Provides persistence operations for trainer qualifications.
pub struct QualificationRepo;

impl QualificationRepo {
    /// Certify a trainer for a class type, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateQualification,
    ) -> Result<Qualification, sqlx::Error> {
        let query = format!(
            "INSERT INTO qualifications (trainer_id, class_type_id)
             VALUES ($1, $2)
             RETURNING {QUALIFICATION_COLUMNS}"
        );
        sqlx::query_as::<_, Qualification>(&query)
            .bind(input.trainer_id)
            .bind(input.class_type_id)
            .fetch_one(exec)
            .await
    }

    /// List every qualification referencing a class type, tombstoned rows
    /// included.
    pub async fn list_by_class_type_include_deleted(
        exec: impl PgExecutor<'_>,
        class_type_id: DbId,
    ) -> Result<Vec<Qualification>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFICATION_COLUMNS} FROM qualifications
             WHERE class_type_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Qualification>(&query)
            .bind(class_type_id)
            .fetch_all(exec)
            .await
    }

    /// Tombstone every live qualification referencing a class type.
    /// Returns the rows affected.
    pub async fn tombstone_by_class_type(
        exec: impl PgExecutor<'_>,
        class_type_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE qualifications SET deleted = TRUE, updated_at = NOW()
             WHERE class_type_id = $1 AND NOT deleted",
        )
        .bind(class_type_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }
}

/// Provides persistence operations for trainer placements.
pub struct TrainerPlacementRepo;

impl TrainerPlacementRepo {
    /// Place a trainer at a gym, returning the created row.
    pub async fn create(
        exec: impl PgExecutor<'_>,
        input: &CreateTrainerPlacement,
    ) -> Result<TrainerPlacement, sqlx::Error> {
        let query = format!(
            "INSERT INTO trainer_placements (gym_id, trainer_id)
             VALUES ($1, $2)
             RETURNING {PLACEMENT_COLUMNS}"
        );
        sqlx::query_as::<_, TrainerPlacement>(&query)
            .bind(input.gym_id)
            .bind(input.trainer_id)
            .fetch_one(exec)
            .await
    }

    /// List every placement referencing a gym, tombstoned rows included.
    pub async fn list_by_gym_include_deleted(
        exec: impl PgExecutor<'_>,
        gym_id: DbId,
    ) -> Result<Vec<TrainerPlacement>, sqlx::Error> {
        let query = format!(
            "SELECT {PLACEMENT_COLUMNS} FROM trainer_placements
             WHERE gym_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, TrainerPlacement>(&query)
            .bind(gym_id)
            .fetch_all(exec)
            .await
    }

    /// Tombstone every live placement referencing a gym. Returns the rows
    /// affected.
    pub async fn tombstone_by_gym(
        exec: impl PgExecutor<'_>,
        gym_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trainer_placements SET deleted = TRUE, updated_at = NOW()
             WHERE gym_id = $1 AND NOT deleted",
        )
        .bind(gym_id)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }
}

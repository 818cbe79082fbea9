//! Handlers for the `/gyms` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use gymdesk_core::types::DbId;
use gymdesk_db::models::gym::Gym;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for a successful gym retirement.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetireGymResponse {
    pub success: bool,
    pub deleted_gym: Gym,
}

/// DELETE /api/v1/gyms/{id}
///
/// Retire a gym and everything it owns: rooms, their class-type links and
/// sessions, bookings (cancelled), and trainer placements, all in one
/// transaction. Retiring an already retired gym is a no-op returning the
/// tombstoned row.
pub async fn retire(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RetireGymResponse>> {
    let retirement = state.cascade.retire_gym(id).await?;
    Ok(Json(RetireGymResponse {
        success: true,
        deleted_gym: retirement.gym,
    }))
}

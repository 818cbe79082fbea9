//! Handlers for the `/class-types` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use gymdesk_core::types::DbId;
use gymdesk_db::models::class_type::ClassType;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for a successful class-type retirement.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetireClassTypeResponse {
    pub success: bool,
    pub class_type: ClassType,
}

/// DELETE /api/v1/class-types/{id}
///
/// Retire a class type. Its qualifications, room links, and sessions are
/// tombstoned and bookings cancelled; memberships referencing it are
/// frozen, never destroyed, so billing history survives.
pub async fn retire(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RetireClassTypeResponse>> {
    let retirement = state.cascade.retire_class_type(id).await?;
    Ok(Json(RetireClassTypeResponse {
        success: true,
        class_type: retirement.class_type,
    }))
}

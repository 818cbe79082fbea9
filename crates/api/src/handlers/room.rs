//! Handlers for the `/rooms` resource: capacity changes and retirement.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use gymdesk_core::types::DbId;
use gymdesk_db::models::room::Room;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for a capacity change.
#[derive(Debug, Deserialize)]
pub struct SetCapacityRequest {
    pub capacity: i32,
}

/// Response for a successful capacity change.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCapacityResponse {
    pub success: bool,
    pub from: i32,
    pub to: i32,
    pub affected_sessions: u64,
}

/// Response for a successful room retirement.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetireRoomResponse {
    pub success: bool,
    pub deleted_room: Room,
}

/// PUT /api/v1/rooms/{id}/capacity
///
/// Change a room's capacity. Returns 400 if the value is out of range or
/// would drop below a future session's active booking count, 404 if the
/// room is missing or retired, and 409 if a concurrent writer changed the
/// capacity first (the caller should re-read and retry).
pub async fn set_capacity(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCapacityRequest>,
) -> AppResult<Json<SetCapacityResponse>> {
    let change = state.capacity.set_room_capacity(id, input.capacity).await?;
    Ok(Json(SetCapacityResponse {
        success: true,
        from: change.from,
        to: change.to,
        affected_sessions: change.affected_sessions,
    }))
}

/// DELETE /api/v1/rooms/{id}
///
/// Retire a room: tombstones its class-type links and sessions, and
/// cancels their bookings, all in one transaction. Retiring an already
/// retired room is a no-op returning the tombstoned row.
pub async fn retire(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RetireRoomResponse>> {
    let retirement = state.cascade.retire_room(id).await?;
    Ok(Json(RetireRoomResponse {
        success: true,
        deleted_room: retirement.room,
    }))
}

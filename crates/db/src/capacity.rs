//! Optimistic-concurrency capacity mutation guard.
//!
//! Changes a room's capacity while preserving the invariant that no future
//! session's active-attendance count ever exceeds it, and detects racing
//! writers with a compare-and-swap on the capacity column itself instead of
//! row locks. The guard never retries; a caller that loses the race gets
//! `ConcurrentModification` and must re-read.

use serde::Serialize;

use gymdesk_core::capacity::validate_capacity;
use gymdesk_core::error::CoreError;
use gymdesk_core::types::DbId;

use crate::error::{not_found, StoreResult};
use crate::repositories::{ClassSessionRepo, RoomRepo};
use crate::DbPool;

/// Summary of a successful capacity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityChange {
    pub from: i32,
    pub to: i32,
    pub affected_sessions: u64,
}

/// Validates and applies room-capacity changes over an injected pool.
#[derive(Clone)]
pub struct CapacityGuard {
    pool: DbPool,
}

impl CapacityGuard {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Change a room's capacity inside one transaction.
    ///
    /// 1. Load the room (tombstoned rooms are `NotFound`).
    /// 2. Validate the 1..=200 range.
    /// 3. On a reduction, scan every future session's active booking
    ///    count; the first count above the new capacity aborts with
    ///    `CapacityConflict` before anything is written.
    /// 4. Conditionally write the new capacity with the old value as the
    ///    precondition. Zero rows affected means another writer changed it
    ///    between steps 1 and 4: `ConcurrentModification`, full rollback.
    /// 5. Propagate the new capacity to the room's future sessions; past
    ///    sessions keep the capacity they ran with.
    pub async fn set_room_capacity(
        &self,
        room_id: DbId,
        new_capacity: i32,
    ) -> StoreResult<CapacityChange> {
        let mut tx = self.pool.begin().await?;

        let room = RoomRepo::find_by_id(&mut *tx, room_id)
            .await?
            .ok_or_else(|| not_found("Room", room_id))?;

        validate_capacity(new_capacity)?;

        let old_capacity = room.capacity;

        if new_capacity < old_capacity {
            let counts = ClassSessionRepo::future_active_counts(&mut *tx, room_id).await?;
            if let Some(conflict) = counts
                .iter()
                .find(|c| c.active_count > i64::from(new_capacity))
            {
                return Err(CoreError::CapacityConflict {
                    requested: new_capacity,
                    session_id: conflict.session_id,
                    active_count: conflict.active_count,
                }
                .into());
            }
        }

        let affected = RoomRepo::cas_update_capacity(&mut *tx, room_id, old_capacity, new_capacity)
            .await?;
        if affected == 0 {
            return Err(CoreError::ConcurrentModification {
                id: room_id,
                expected: old_capacity,
            }
            .into());
        }

        let affected_sessions =
            ClassSessionRepo::propagate_capacity(&mut *tx, room_id, new_capacity).await?;

        tx.commit().await?;

        tracing::info!(
            room_id,
            from = old_capacity,
            to = new_capacity,
            affected_sessions,
            "Room capacity changed"
        );

        Ok(CapacityChange {
            from: old_capacity,
            to: new_capacity,
            affected_sessions,
        })
    }
}

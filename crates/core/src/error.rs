use crate::types::DbId;

/// Typed domain failures surfaced by the cascade coordinator and the
/// capacity guard.
///
/// None of these are retried internally; every variant carries enough
/// context (old/new values, offending counts) for the caller to decide on
/// retry or user-facing messaging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The target entity does not exist, or is tombstoned where a live row
    /// is required.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The requested capacity is outside the allowed range.
    #[error("capacity {requested} is outside the allowed range {min}..={max}")]
    CapacityOutOfRange {
        requested: i32,
        min: i32,
        max: i32,
    },

    /// A reduction would drop the room capacity below the active booking
    /// count of a future session.
    #[error(
        "cannot set capacity to {requested}: session {session_id} has {active_count} active bookings"
    )]
    CapacityConflict {
        requested: i32,
        session_id: DbId,
        active_count: i64,
    },

    /// The compare-and-swap precondition failed: another writer changed the
    /// row between read and write. Callers must re-read and retry.
    #[error("room {id} was modified concurrently: expected capacity {expected}")]
    ConcurrentModification { id: DbId, expected: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_conflict_message_names_both_counts() {
        let err = CoreError::CapacityConflict {
            requested: 5,
            session_id: 42,
            active_count: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('6'), "got: {msg}");
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Gym",
            id: 7,
        };
        assert_eq!(err.to_string(), "Gym with id 7 not found");
    }
}

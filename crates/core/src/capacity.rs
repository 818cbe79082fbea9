//! The room-capacity business rule.
//!
//! Rooms (and the sessions scheduled in them) hold between [`MIN_CAPACITY`]
//! and [`MAX_CAPACITY`] people. The range is validated here once so the
//! guard and any future write path agree on the bounds.

use crate::error::CoreError;

/// Smallest allowed room capacity.
pub const MIN_CAPACITY: i32 = 1;

/// Largest allowed room capacity.
pub const MAX_CAPACITY: i32 = 200;

/// Validate that `requested` lies within the allowed capacity range.
pub fn validate_capacity(requested: i32) -> Result<(), CoreError> {
    if (MIN_CAPACITY..=MAX_CAPACITY).contains(&requested) {
        Ok(())
    } else {
        Err(CoreError::CapacityOutOfRange {
            requested,
            min: MIN_CAPACITY,
            max: MAX_CAPACITY,
        })
    }
}

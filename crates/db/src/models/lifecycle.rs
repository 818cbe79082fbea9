//! Tagged soft-delete state.
//!
//! The tombstone is persisted as a plain `deleted` boolean column (and
//! serialized as one on the wire), but modelled in Rust as a two-state
//! enum so code cannot confuse "live" and "tombstoned" rows or invent a
//! third state.

use serde::{Serialize, Serializer};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, PgValueRef};
use sqlx::{Decode, Postgres, Type};

/// Logical-deletion state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// The row is visible to normal queries.
    Active,
    /// The row is logically deleted but physically retained for audit and
    /// billing history.
    Tombstoned,
}

impl Lifecycle {
    pub fn is_tombstoned(self) -> bool {
        matches!(self, Lifecycle::Tombstoned)
    }

    /// The boolean form stored in the `deleted` column.
    pub fn as_flag(self) -> bool {
        self.is_tombstoned()
    }
}

impl From<bool> for Lifecycle {
    fn from(deleted: bool) -> Self {
        if deleted {
            Lifecycle::Tombstoned
        } else {
            Lifecycle::Active
        }
    }
}

impl Type<Postgres> for Lifecycle {
    fn type_info() -> PgTypeInfo {
        <bool as Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Lifecycle {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(Lifecycle::from(<bool as Decode<Postgres>>::decode(value)?))
    }
}

impl Serialize for Lifecycle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.as_flag())
    }
}

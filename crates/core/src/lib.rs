//! Domain types and rules shared by the persistence and API layers.
//!
//! This crate is deliberately free of sqlx and axum: it holds the id and
//! timestamp aliases, the room-capacity rule, and the typed error taxonomy
//! that the coordinator and guard surface to callers.

pub mod capacity;
pub mod error;
pub mod types;

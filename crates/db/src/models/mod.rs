//! Entity models: one struct per table plus create DTOs.
//!
//! Every cascading entity carries a [`lifecycle::Lifecycle`] state decoded
//! from its boolean `deleted` column; memberships use a status enum
//! instead.

pub mod attendance;
pub mod class_session;
pub mod class_type;
pub mod gym;
pub mod lifecycle;
pub mod membership;
pub mod room;
pub mod room_class_type;
pub mod staffing;
pub mod status;

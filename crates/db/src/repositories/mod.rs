//! Repository layer — the hierarchy store.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept an `impl PgExecutor<'_>` as the first argument, so the same call
//! runs against the pool directly or inside a caller-owned transaction.
//! No repository method ever commits.

pub mod attendance_repo;
pub mod class_session_repo;
pub mod class_type_repo;
pub mod gym_repo;
pub mod membership_repo;
pub mod room_class_type_repo;
pub mod room_repo;
pub mod staffing_repo;

pub use attendance_repo::AttendanceRepo;
pub use class_session_repo::ClassSessionRepo;
pub use class_type_repo::ClassTypeRepo;
pub use gym_repo::GymRepo;
pub use membership_repo::MembershipRepo;
pub use room_class_type_repo::RoomClassTypeRepo;
pub use room_repo::RoomRepo;
pub use staffing_repo::{QualificationRepo, TrainerPlacementRepo};

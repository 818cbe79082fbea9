//! Cascading soft-delete coordinator.
//!
//! Propagates a tombstone from a root entity down through its dependents
//! inside one transaction, applying entity-specific rules: attendance rows
//! are cancelled as they are tombstoned, and memberships are frozen, never
//! tombstoned. Any failure rolls the whole cascade back; partial cascades
//! would leave active bookings attached to an apparently deleted parent.
//!
//! Retiring an entity that is already tombstoned is an idempotent no-op
//! returning the current row with zeroed cascade counts. A missing id is
//! `NotFound`.

use serde::Serialize;
use sqlx::PgConnection;

use gymdesk_core::types::DbId;

use crate::error::{not_found, StoreResult};
use crate::models::class_type::ClassType;
use crate::models::gym::Gym;
use crate::models::room::Room;
use crate::repositories::{
    AttendanceRepo, ClassSessionRepo, ClassTypeRepo, GymRepo, MembershipRepo, QualificationRepo,
    RoomClassTypeRepo, RoomRepo, TrainerPlacementRepo,
};
use crate::DbPool;

/// Result of retiring a gym: the tombstoned row plus per-layer counts.
#[derive(Debug, Clone, Serialize)]
pub struct GymRetirement {
    pub gym: Gym,
    pub rooms_retired: u64,
    pub links_retired: u64,
    pub sessions_retired: u64,
    pub attendances_cancelled: u64,
    pub placements_retired: u64,
}

/// Result of retiring a single room.
#[derive(Debug, Clone, Serialize)]
pub struct RoomRetirement {
    pub room: Room,
    pub links_retired: u64,
    pub sessions_retired: u64,
    pub attendances_cancelled: u64,
}

/// Result of retiring a class type.
#[derive(Debug, Clone, Serialize)]
pub struct ClassTypeRetirement {
    pub class_type: ClassType,
    pub qualifications_retired: u64,
    pub memberships_frozen: u64,
    pub links_retired: u64,
    pub sessions_retired: u64,
    pub attendances_cancelled: u64,
}

/// Rows touched below a room during a cascade.
#[derive(Debug, Clone, Copy, Default)]
struct SubtreeCounts {
    links: u64,
    sessions: u64,
    attendances: u64,
}

/// Coordinates cascading retirements over an injected pool.
///
/// Each operation is exactly one transaction; repositories are invoked
/// against the transaction connection and never commit on their own.
#[derive(Clone)]
pub struct CascadeCoordinator {
    pool: DbPool,
}

impl CascadeCoordinator {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Retire a gym and everything transitively owned by it: rooms, their
    /// room/class-type links, sessions, attendance rows (cancelled), and
    /// the gym's trainer placements.
    pub async fn retire_gym(&self, gym_id: DbId) -> StoreResult<GymRetirement> {
        let mut tx = self.pool.begin().await?;
        set_serializable(&mut tx).await?;

        let gym = GymRepo::find_by_id_include_deleted(&mut *tx, gym_id)
            .await?
            .ok_or_else(|| not_found("Gym", gym_id))?;

        if gym.state.is_tombstoned() {
            return Ok(GymRetirement {
                gym,
                rooms_retired: 0,
                links_retired: 0,
                sessions_retired: 0,
                attendances_cancelled: 0,
                placements_retired: 0,
            });
        }

        GymRepo::tombstone(&mut *tx, gym_id).await?;

        let rooms = RoomRepo::list_by_gym(&mut *tx, gym_id).await?;
        let mut totals = SubtreeCounts::default();
        for room in &rooms {
            RoomRepo::tombstone(&mut *tx, room.id).await?;
            let counts = retire_room_subtree(&mut tx, room.id).await?;
            totals.links += counts.links;
            totals.sessions += counts.sessions;
            totals.attendances += counts.attendances;
        }

        let placements_retired = TrainerPlacementRepo::tombstone_by_gym(&mut *tx, gym_id).await?;

        let gym = GymRepo::find_by_id_include_deleted(&mut *tx, gym_id)
            .await?
            .ok_or_else(|| not_found("Gym", gym_id))?;

        tx.commit().await?;

        tracing::info!(
            gym_id,
            rooms = rooms.len(),
            sessions = totals.sessions,
            attendances = totals.attendances,
            placements = placements_retired,
            "Gym retired"
        );

        Ok(GymRetirement {
            gym,
            rooms_retired: rooms.len() as u64,
            links_retired: totals.links,
            sessions_retired: totals.sessions,
            attendances_cancelled: totals.attendances,
            placements_retired,
        })
    }

    /// Retire a single room and its subtree. Also used per room by
    /// [`CascadeCoordinator::retire_gym`], where the steps run inside the
    /// gym's transaction instead.
    pub async fn retire_room(&self, room_id: DbId) -> StoreResult<RoomRetirement> {
        let mut tx = self.pool.begin().await?;
        set_serializable(&mut tx).await?;

        let room = RoomRepo::find_by_id_include_deleted(&mut *tx, room_id)
            .await?
            .ok_or_else(|| not_found("Room", room_id))?;

        if room.state.is_tombstoned() {
            return Ok(RoomRetirement {
                room,
                links_retired: 0,
                sessions_retired: 0,
                attendances_cancelled: 0,
            });
        }

        RoomRepo::tombstone(&mut *tx, room_id).await?;
        let counts = retire_room_subtree(&mut tx, room_id).await?;

        let room = RoomRepo::find_by_id_include_deleted(&mut *tx, room_id)
            .await?
            .ok_or_else(|| not_found("Room", room_id))?;

        tx.commit().await?;

        tracing::info!(
            room_id,
            sessions = counts.sessions,
            attendances = counts.attendances,
            "Room retired"
        );

        Ok(RoomRetirement {
            room,
            links_retired: counts.links,
            sessions_retired: counts.sessions,
            attendances_cancelled: counts.attendances,
        })
    }

    /// Retire a class type: tombstone it, its qualifications, its
    /// room/class-type links and their sessions (cancelling attendance),
    /// and freeze every non-terminal membership referencing it.
    /// Memberships keep their history and are never tombstoned.
    pub async fn retire_class_type(&self, class_type_id: DbId) -> StoreResult<ClassTypeRetirement> {
        let mut tx = self.pool.begin().await?;
        set_serializable(&mut tx).await?;

        let class_type = ClassTypeRepo::find_by_id_include_deleted(&mut *tx, class_type_id)
            .await?
            .ok_or_else(|| not_found("ClassType", class_type_id))?;

        if class_type.state.is_tombstoned() {
            return Ok(ClassTypeRetirement {
                class_type,
                qualifications_retired: 0,
                memberships_frozen: 0,
                links_retired: 0,
                sessions_retired: 0,
                attendances_cancelled: 0,
            });
        }

        ClassTypeRepo::tombstone(&mut *tx, class_type_id).await?;
        let qualifications_retired =
            QualificationRepo::tombstone_by_class_type(&mut *tx, class_type_id).await?;
        let memberships_frozen =
            MembershipRepo::freeze_by_class_type(&mut *tx, class_type_id).await?;

        // Session and attendance statements resolve sessions through the
        // links by class_type_id, so the links can be tombstoned first.
        let links_retired =
            RoomClassTypeRepo::tombstone_by_class_type(&mut *tx, class_type_id).await?;
        let sessions_retired =
            ClassSessionRepo::tombstone_by_class_type(&mut *tx, class_type_id).await?;
        let attendances_cancelled =
            AttendanceRepo::cancel_by_class_type(&mut *tx, class_type_id).await?;

        let class_type = ClassTypeRepo::find_by_id_include_deleted(&mut *tx, class_type_id)
            .await?
            .ok_or_else(|| not_found("ClassType", class_type_id))?;

        tx.commit().await?;

        tracing::info!(
            class_type_id,
            memberships_frozen,
            sessions = sessions_retired,
            attendances = attendances_cancelled,
            "Class type retired"
        );

        Ok(ClassTypeRetirement {
            class_type,
            qualifications_retired,
            memberships_frozen,
            links_retired,
            sessions_retired,
            attendances_cancelled,
        })
    }
}

/// Tombstone a room's links and sessions, cancelling their attendance.
/// The room row itself is tombstoned by the caller first.
async fn retire_room_subtree(
    conn: &mut PgConnection,
    room_id: DbId,
) -> Result<SubtreeCounts, sqlx::Error> {
    let links = RoomClassTypeRepo::tombstone_by_room(&mut *conn, room_id).await?;
    let sessions = ClassSessionRepo::tombstone_by_room(&mut *conn, room_id).await?;
    let attendances = AttendanceRepo::cancel_by_room(&mut *conn, room_id).await?;
    Ok(SubtreeCounts {
        links,
        sessions,
        attendances,
    })
}

/// Cascades run serializable so a booking inserted mid-cascade cannot
/// escape the tombstone sweep on a store with weaker default isolation.
async fn set_serializable(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
        .execute(conn)
        .await?;
    Ok(())
}

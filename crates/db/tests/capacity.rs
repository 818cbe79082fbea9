//! Integration tests for the capacity mutation guard.
//!
//! Verifies the booking-count invariant, range validation, the
//! compare-and-swap conflict detector, and that propagation reaches
//! future sessions only.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use sqlx::PgPool;

use gymdesk_core::error::CoreError;
use gymdesk_db::capacity::CapacityGuard;
use gymdesk_db::error::StoreError;
use gymdesk_db::models::attendance::CreateAttendance;
use gymdesk_db::models::class_session::CreateClassSession;
use gymdesk_db::models::class_type::CreateClassType;
use gymdesk_db::models::gym::CreateGym;
use gymdesk_db::models::room::CreateRoom;
use gymdesk_db::models::room_class_type::CreateRoomClassType;
use gymdesk_db::models::status::AttendanceStatus;
use gymdesk_db::repositories::{
    AttendanceRepo, ClassSessionRepo, ClassTypeRepo, GymRepo, RoomClassTypeRepo, RoomRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A gym with one room of the given capacity, linked to one class type.
/// Returns `(room_id, link_id)`.
async fn room_with_link(pool: &PgPool, capacity: i32) -> (i64, i64) {
    let gym = GymRepo::create(
        pool,
        &CreateGym {
            address: "5 Capacity Court".into(),
        },
    )
    .await
    .unwrap();
    let room = RoomRepo::create(
        pool,
        &CreateRoom {
            gym_id: gym.id,
            capacity,
        },
    )
    .await
    .unwrap();
    let class_type = ClassTypeRepo::create(
        pool,
        &CreateClassType {
            name: "HIIT".into(),
            description: None,
            level: "intermediate".into(),
        },
    )
    .await
    .unwrap();
    let link = RoomClassTypeRepo::create(
        pool,
        &CreateRoomClassType {
            room_id: room.id,
            class_type_id: class_type.id,
        },
    )
    .await
    .unwrap();
    (room.id, link.id)
}

async fn session_at(pool: &PgPool, link_id: i64, capacity: i32, days_from_now: i64) -> i64 {
    ClassSessionRepo::create(
        pool,
        &CreateClassSession {
            room_class_type_id: link_id,
            trainer_id: None,
            capacity,
            starts_at: Utc::now() + Duration::days(days_from_now),
            duration_mins: 45,
        },
    )
    .await
    .unwrap()
    .id
}

async fn book_n(pool: &PgPool, session_id: i64, count: usize, status: AttendanceStatus) {
    for i in 0..count {
        let client: (i64,) =
            sqlx::query_as("INSERT INTO clients (name) VALUES ($1) RETURNING id")
                .bind(format!("client-{session_id}-{i}"))
                .fetch_one(pool)
                .await
                .unwrap();
        AttendanceRepo::create(
            pool,
            &CreateAttendance {
                class_session_id: session_id,
                client_id: client.0,
                status: Some(status),
            },
        )
        .await
        .unwrap();
    }
}

async fn room_capacity(pool: &PgPool, room_id: i64) -> i32 {
    RoomRepo::find_by_id(pool, room_id)
        .await
        .unwrap()
        .unwrap()
        .capacity
}

// ---------------------------------------------------------------------------
// Test: growing with no sessions affects nothing else
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_grow_capacity_with_no_sessions(pool: PgPool) {
    let (room_id, _) = room_with_link(&pool, 10).await;

    let guard = CapacityGuard::new(pool.clone());
    let change = guard.set_room_capacity(room_id, 20).await.unwrap();

    assert_eq!(change.from, 10);
    assert_eq!(change.to, 20);
    assert_eq!(change.affected_sessions, 0);
    assert_eq!(room_capacity(&pool, room_id).await, 20);
}

// ---------------------------------------------------------------------------
// Test: reduction below a future session's booking count is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_reduction_below_future_booking_count_conflicts(pool: PgPool) {
    let (room_id, link_id) = room_with_link(&pool, 10).await;
    let session_id = session_at(&pool, link_id, 10, 3).await;
    book_n(&pool, session_id, 6, AttendanceStatus::Booked).await;

    let guard = CapacityGuard::new(pool.clone());
    let err = guard.set_room_capacity(room_id, 5).await.unwrap_err();

    assert_matches!(
        err,
        StoreError::Domain(CoreError::CapacityConflict {
            requested: 5,
            active_count: 6,
            ..
        })
    );
    // The error message carries both numbers for user-facing output.
    let msg = err.to_string();
    assert!(msg.contains('5') && msg.contains('6'), "got: {msg}");

    // Nothing was written.
    assert_eq!(room_capacity(&pool, room_id).await, 10);
}

// ---------------------------------------------------------------------------
// Test: reduction down to exactly the booking count is allowed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_reduction_to_exact_booking_count_is_allowed(pool: PgPool) {
    let (room_id, link_id) = room_with_link(&pool, 10).await;
    let session_id = session_at(&pool, link_id, 10, 3).await;
    book_n(&pool, session_id, 6, AttendanceStatus::Booked).await;

    let guard = CapacityGuard::new(pool.clone());
    let change = guard.set_room_capacity(room_id, 6).await.unwrap();

    assert_eq!(change.from, 10);
    assert_eq!(change.to, 6);
    assert_eq!(change.affected_sessions, 1);
}

// ---------------------------------------------------------------------------
// Test: cancelled and missed bookings do not count against capacity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_inactive_bookings_do_not_count(pool: PgPool) {
    let (room_id, link_id) = room_with_link(&pool, 10).await;
    let session_id = session_at(&pool, link_id, 10, 3).await;
    book_n(&pool, session_id, 2, AttendanceStatus::Booked).await;
    book_n(&pool, session_id, 3, AttendanceStatus::Cancelled).await;
    book_n(&pool, session_id, 1, AttendanceStatus::Missed).await;

    let guard = CapacityGuard::new(pool.clone());
    // Six rows exist but only two are active, so 2 fits.
    let change = guard.set_room_capacity(room_id, 2).await.unwrap();
    assert_eq!(change.to, 2);
}

// ---------------------------------------------------------------------------
// Test: propagation reaches future sessions only
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_propagation_touches_future_sessions_only(pool: PgPool) {
    let (room_id, link_id) = room_with_link(&pool, 10).await;
    let past_id = session_at(&pool, link_id, 10, -3).await;
    let future_id = session_at(&pool, link_id, 10, 3).await;

    let guard = CapacityGuard::new(pool.clone());
    let change = guard.set_room_capacity(room_id, 15).await.unwrap();
    assert_eq!(change.affected_sessions, 1);

    let past = ClassSessionRepo::find_by_id_include_deleted(&pool, past_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(past.capacity, 10, "past session keeps the capacity it ran with");

    let future = ClassSessionRepo::find_by_id_include_deleted(&pool, future_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(future.capacity, 15);
}

// ---------------------------------------------------------------------------
// Test: out-of-range capacities are rejected before any write
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_out_of_range_capacity_rejected(pool: PgPool) {
    let (room_id, _) = room_with_link(&pool, 10).await;
    let guard = CapacityGuard::new(pool.clone());

    let err = guard.set_room_capacity(room_id, 0).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Domain(CoreError::CapacityOutOfRange { requested: 0, .. })
    );

    let err = guard.set_room_capacity(room_id, 201).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Domain(CoreError::CapacityOutOfRange { requested: 201, .. })
    );

    assert_eq!(room_capacity(&pool, room_id).await, 10);
}

// ---------------------------------------------------------------------------
// Test: missing or tombstoned rooms are NotFound
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_or_tombstoned_room_is_not_found(pool: PgPool) {
    let guard = CapacityGuard::new(pool.clone());
    let err = guard.set_room_capacity(12345, 10).await.unwrap_err();
    assert_matches!(err, StoreError::Domain(CoreError::NotFound { .. }));

    let (room_id, _) = room_with_link(&pool, 10).await;
    RoomRepo::tombstone(&pool, room_id).await.unwrap();
    let err = guard.set_room_capacity(room_id, 10).await.unwrap_err();
    assert_matches!(err, StoreError::Domain(CoreError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Test: a racing writer drives the guard into ConcurrentModification
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_guard_surfaces_conflict_when_racing_writer_commits_first(pool: PgPool) {
    let (room_id, _) = room_with_link(&pool, 10).await;

    // Writer 1 updates the row in an open transaction and holds the lock.
    let mut tx = pool.begin().await.unwrap();
    sqlx::query("UPDATE rooms SET capacity = 30, updated_at = NOW() WHERE id = $1")
        .bind(room_id)
        .execute(&mut *tx)
        .await
        .unwrap();

    // The guard reads capacity = 10 (writer 1 has not committed), then its
    // conditional update blocks on writer 1's row lock.
    let guard = CapacityGuard::new(pool.clone());
    let racing = tokio::spawn(async move { guard.set_room_capacity(room_id, 15).await });

    // Give the guard time to pass its read and park on the lock, then let
    // writer 1 win. The guard's precondition re-evaluates against
    // capacity = 30 and matches zero rows.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    tx.commit().await.unwrap();

    let err = racing.await.unwrap().unwrap_err();
    assert_matches!(
        err,
        StoreError::Domain(CoreError::ConcurrentModification {
            expected: 10,
            ..
        })
    );

    // Writer 1's value stands; the losing guard wrote nothing.
    assert_eq!(room_capacity(&pool, room_id).await, 30);
}

// ---------------------------------------------------------------------------
// Test: the CAS primitive refuses a stale expected value
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_cas_refuses_stale_expected_capacity(pool: PgPool) {
    let (room_id, _) = room_with_link(&pool, 10).await;

    // Writer 1 wins the race: 10 -> 20.
    let affected = RoomRepo::cas_update_capacity(&pool, room_id, 10, 20)
        .await
        .unwrap();
    assert_eq!(affected, 1);

    // Writer 2 still holds old_capacity = 10; its precondition fails and
    // nothing is written.
    let affected = RoomRepo::cas_update_capacity(&pool, room_id, 10, 15)
        .await
        .unwrap();
    assert_eq!(affected, 0);
    assert_eq!(room_capacity(&pool, room_id).await, 20);
}

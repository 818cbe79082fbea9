use std::sync::Arc;

use gymdesk_db::capacity::CapacityGuard;
use gymdesk_db::cascade::CascadeCoordinator;
use gymdesk_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The coordinator and guard receive the pool at construction; handlers
/// never reach for an ambient database handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cascading soft-delete coordinator.
    pub cascade: CascadeCoordinator,
    /// Optimistic-concurrency capacity guard.
    pub capacity: CapacityGuard,
}

impl AppState {
    /// Build the state from a pool and configuration, wiring the
    /// coordinator and guard to the same pool.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            cascade: CascadeCoordinator::new(pool.clone()),
            capacity: CapacityGuard::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}

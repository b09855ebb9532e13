use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Application configuration
    pub config: Arc<Config>,
    /// Source of "today" and "now" for the dashboards
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create application state backed by the wall clock
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self::with_clock(db, config, Arc::new(SystemClock))
    }

    /// Create application state with an explicit clock
    pub fn with_clock(db: DatabaseConnection, config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            db,
            config: Arc::new(config),
            clock,
        }
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{PlannerConfig, Routes};

/// Shared application state.
///
/// Built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Route schedules loaded from the timetable
    pub routes: Arc<Routes>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: Routes, config: PlannerConfig) -> Self {
        Self {
            routes: Arc::new(routes),
            config: Arc::new(config),
        }
    }
}

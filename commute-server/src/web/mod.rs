//! Web layer for the commute planner.
//!
//! Provides the HTTP endpoint that returns ranked commute options.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

//! Commute planner over fixed daily timetables.
//!
//! This module answers: "given the time now, what are my best next
//! options on each route, and which gets me there first?"
//!
//! Both route builders pick departures with [`select_next`], chain legs
//! with fixed ride times, and hand their options to [`rank_options`],
//! which orders everything by arrival.

mod config;
mod express;
mod plan;
mod rank;
mod select;
mod transfer;

pub use config::{ExpressRouteConfig, PlannerConfig, TransferRouteConfig};
pub use express::ExpressRoute;
pub use plan::{CommutePlan, Planner, Routes};
pub use rank::{Recommendation, arrival_instant, rank_options};
pub use select::{Departures, select_next};
pub use transfer::TransferRoute;

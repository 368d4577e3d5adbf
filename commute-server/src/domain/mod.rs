//! Domain types for the commute planner.
//!
//! This module contains the time and itinerary types the planner works
//! with. Times are validated at construction, so code that receives them
//! can trust their ranges.

mod itinerary;
mod time;

pub use itinerary::{Connection, Interchange, ItineraryOption, RouteId, RouteResult};
pub use time::{ServiceTime, TimeError, TimeOfDay};

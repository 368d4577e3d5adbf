//! Cross-route ranking of itinerary options.
//!
//! Options from every route are merged into one list ordered by when they
//! get the rider to the destination.

use crate::domain::{ItineraryOption, RouteId, RouteResult, ServiceTime};

/// One ranked option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// 1-based position in the ranking.
    pub rank: usize,

    /// Route the option belongs to.
    pub route: RouteId,

    /// Index of the option within its route's result.
    pub option_index: usize,

    /// Resolved arrival at the destination.
    pub arrival: ServiceTime,

    /// The option itself, unmodified.
    pub option: ItineraryOption,
}

/// Absolute arrival of an option.
///
/// The arrival's time of day is resolved against the departure of the
/// option's final leg, so an arrival after midnight sorts after
/// late-evening ones. Exact as long as that leg rides for under a day.
pub fn arrival_instant(option: &ItineraryOption) -> ServiceTime {
    option
        .arrival
        .time_of_day()
        .resolve_after(option.final_departure())
}

/// Rank options from all routes by arrival, earliest first.
///
/// Routes are taken in the order given and options in their emission
/// order; the sort is stable, so equal arrivals keep that order.
pub fn rank_options<'a>(routes: impl IntoIterator<Item = &'a RouteResult>) -> Vec<Recommendation> {
    let mut candidates: Vec<(ServiceTime, RouteId, usize, ItineraryOption)> = routes
        .into_iter()
        .flat_map(|result| {
            result
                .options
                .iter()
                .enumerate()
                .map(move |(index, option)| {
                    (arrival_instant(option), result.route, index, *option)
                })
        })
        .collect();

    candidates.sort_by_key(|(arrival, ..)| *arrival);

    candidates
        .into_iter()
        .enumerate()
        .map(|(position, (arrival, route, option_index, option))| Recommendation {
            rank: position + 1,
            route,
            option_index,
            arrival,
            option,
        })
        .collect()
}

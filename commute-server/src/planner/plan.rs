//! Request-level planning: build both routes, then rank.

use tracing::debug;

use crate::domain::{RouteResult, ServiceTime};
use crate::schedule::{
    EXPRESS_LEG, ScheduleError, TRANSFER_FIRST_LEG, TRANSFER_SECOND_LEG, Timetable,
};

use super::config::PlannerConfig;
use super::express::ExpressRoute;
use super::rank::{Recommendation, rank_options};
use super::transfer::TransferRoute;

/// The two commuter routes, built from the timetable at startup.
#[derive(Debug, Clone)]
pub struct Routes {
    pub transfer: TransferRoute,
    pub express: ExpressRoute,
}

impl Routes {
    /// Pick the legs both routes need out of the timetable.
    ///
    /// Fails if any required leg is missing.
    pub fn from_timetable(timetable: &Timetable) -> Result<Self, ScheduleError> {
        let transfer = TransferRoute::new(
            timetable.require(TRANSFER_FIRST_LEG)?.clone(),
            timetable.require(TRANSFER_SECOND_LEG)?.clone(),
        );
        let express = ExpressRoute::new(timetable.require(EXPRESS_LEG)?.clone());

        Ok(Self { transfer, express })
    }
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommutePlan {
    /// The instant options were computed against.
    pub reference: ServiceTime,

    pub transfer: RouteResult,
    pub express: RouteResult,

    /// Options from both routes, best first.
    pub recommendations: Vec<Recommendation>,
}

/// Commute planner over a fixed pair of routes.
pub struct Planner<'a> {
    routes: &'a Routes,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(routes: &'a Routes, config: &'a PlannerConfig) -> Self {
        Self { routes, config }
    }

    /// Compute options and recommendations for `reference`.
    pub fn plan(&self, reference: ServiceTime) -> CommutePlan {
        let transfer = self
            .routes
            .transfer
            .options(reference, &self.config.transfer);
        let express = self.routes.express.options(reference, &self.config.express);
        let recommendations = rank_options([&transfer, &express]);

        debug!(
            reference = %reference,
            transfer_options = transfer.len(),
            express_options = express.len(),
            "planned commute"
        );

        CommutePlan {
            reference,
            transfer,
            express,
            recommendations,
        }
    }
}

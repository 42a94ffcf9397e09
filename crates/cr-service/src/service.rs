//! `TrafficService`: use cases over the road store, the vehicle
//! catalog and a [`Router`].

use tracing::{debug, info, warn};

use cr_core::{Road, RoadId, VehicleType};
use cr_routing::{RoadSnapshot, Route, RouteFinder, Router, RouterConfig};
use cr_store::{RoadStore, VehicleCatalog};

use crate::{CongestionUpdate, RoadCongestion, ServiceResult};

/// Entry point for every road / vehicle / routing operation.
///
/// Generic over the stores and the router so tests and alternative
/// deployments can plug in their own.  The default router is
/// [`RouteFinder`].
pub struct TrafficService<S: RoadStore, C: VehicleCatalog, R: Router = RouteFinder> {
    roads:    S,
    vehicles: C,
    router:   R,
}

impl<S: RoadStore, C: VehicleCatalog> TrafficService<S, C, RouteFinder> {
    /// Build a service routing with a [`RouteFinder`] configured by `config`.
    pub fn with_router_config(roads: S, vehicles: C, config: RouterConfig) -> Self {
        Self::new(roads, vehicles, RouteFinder::new(config))
    }
}

impl<S: RoadStore, C: VehicleCatalog, R: Router> TrafficService<S, C, R> {
    pub fn new(roads: S, vehicles: C, router: R) -> Self {
        Self { roads, vehicles, router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    // ── Roads ─────────────────────────────────────────────────────────────

    pub fn list_roads(&self) -> ServiceResult<Vec<Road>> {
        Ok(self.roads.list_roads()?)
    }

    pub fn find_road(&self, id: RoadId) -> ServiceResult<Option<Road>> {
        Ok(self.roads.get_road(id)?)
    }

    // ── Vehicles & congestion ─────────────────────────────────────────────

    pub fn list_vehicle_types(&self) -> ServiceResult<Vec<VehicleType>> {
        Ok(self.vehicles.list_vehicle_types()?)
    }

    /// Every road that currently carries vehicles, in store order.
    pub fn list_congestion(&self) -> ServiceResult<Vec<RoadCongestion>> {
        Ok(self
            .roads
            .list_roads()?
            .into_iter()
            .filter(Road::has_occupancy)
            .map(|r| RoadCongestion::new(r.id, r.vehicles))
            .collect())
    }

    /// Replace all road occupancy with `update` and persist the road set.
    ///
    /// Returns the roads as stored.
    ///
    /// # Errors
    ///
    /// [`ValidationError`](crate::ValidationError) if the update names an
    /// unknown road or vehicle type; the store is left untouched.
    pub fn update_congestion(&self, update: CongestionUpdate) -> ServiceResult<Vec<Road>> {
        let mut roads = self.roads.list_roads()?;
        let vehicle_types = self.vehicles.list_vehicle_types()?;

        if let Err(e) = update.validate(&roads, &vehicle_types) {
            warn!(error = %e, "congestion update rejected");
            return Err(e.into());
        }

        let entries = update.congestions.len();
        update.apply(&mut roads);
        self.roads.replace_all_roads(roads.clone())?;

        info!(
            entries,
            congested = roads.iter().filter(|r| r.has_occupancy()).count(),
            "congestion updated"
        );
        Ok(roads)
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Least-cost route between two roads under current congestion.
    ///
    /// An empty route means either road is unknown or no path exists.
    pub fn efficient_route(&self, start: RoadId, end: RoadId) -> ServiceResult<Route> {
        let vehicle_types = self.vehicles.list_vehicle_types()?;
        let roads = self.roads.list_roads()?;
        debug!(%start, %end, roads = roads.len(), "routing request");

        let snapshot = RoadSnapshot::new(roads, &vehicle_types)?;
        Ok(self.router.route(&snapshot, start, end))
    }
}

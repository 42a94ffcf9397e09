//! Routing trait and the congestion-aware route finder.
//!
//! # Pluggability
//!
//! `cr-service` calls routing via the [`Router`] trait, so a different
//! search (priority queue, A*, …) can be swapped in without touching the use
//! cases.  The default [`RouteFinder`] is a Dijkstra with a linear
//! minimum scan: for networks of tens to low hundreds of roads the O(n²)
//! scan is cheap, and it keeps ties resolved by enumeration order.
//!
//! # Cost units
//!
//! Costs are unitless `f64`: distance plus congestion weight × vehicle count.

use tracing::{debug, trace};

use cr_core::{Road, RoadId, VehicleType};

use crate::cost::relax;
use crate::topology::declared_edges;
use crate::{RoadSnapshot, RouterConfig, RoutingResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
///
/// An empty route means the start or end road is unknown, or no path
/// connects them.  The two cases are deliberately not distinguished.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Roads to traverse in order, start and end inclusive.
    pub roads: Vec<RoadId>,
    /// Display names of `roads`, same order.
    pub names: Vec<String>,
    /// Settled cost of the end road.  `0.0` for an empty route.
    pub total_cost: f64,
}

impl Route {
    pub fn empty() -> Self {
        Self { roads: Vec::new(), names: Vec::new(), total_cost: 0.0 }
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Number of roads on the route (not edges).
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    /// Consume the route, keeping only the road names.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync`; they hold no per-query state and
/// may be shared by concurrent requests, each bringing its own snapshot.
pub trait Router: Send + Sync {
    /// Least-cost route from `start` to `end` over `snapshot`.
    fn route(&self, snapshot: &RoadSnapshot, start: RoadId, end: RoadId) -> Route;
}

// ── RouteFinder ───────────────────────────────────────────────────────────────

/// Dijkstra over the snapshot, augmented by the configured
/// [`InferenceMode`](crate::InferenceMode).
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteFinder {
    config: RouterConfig,
}

impl RouteFinder {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> RouterConfig {
        self.config
    }

    /// Build a snapshot from `roads` / `vehicle_types` and route over it.
    ///
    /// # Errors
    ///
    /// Only snapshot validation fails; see [`RoadSnapshot::new`].
    pub fn find_route(
        &self,
        roads:         Vec<Road>,
        vehicle_types: &[VehicleType],
        start:         RoadId,
        end:           RoadId,
    ) -> RoutingResult<Route> {
        let snapshot = RoadSnapshot::new(roads, vehicle_types)?;
        Ok(self.route(&snapshot, start, end))
    }
}

impl Router for RouteFinder {
    fn route(&self, snapshot: &RoadSnapshot, start: RoadId, end: RoadId) -> Route {
        let (Some(from), Some(to)) = (snapshot.position(start), snapshot.position(end)) else {
            debug!(%start, %end, "route endpoint not in road set");
            return Route::empty();
        };

        let route = search(snapshot, self.config, from, to)
            .and_then(|(prev, cost)| {
                let chain = reconstruct(&prev, from, to)?;
                Some(Route {
                    roads:      chain.iter().map(|&p| snapshot.road(p).id).collect(),
                    names:      chain.iter().map(|&p| snapshot.road(p).name.clone()).collect(),
                    total_cost: cost,
                })
            })
            .unwrap_or_else(Route::empty);

        debug!(
            %start,
            %end,
            inference = %self.config.inference,
            hops = route.len(),
            total_cost = route.total_cost,
            "route computed"
        );
        route
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Run the relaxation loop from `from` until `to` is settled or every road
/// is.  Returns the predecessor array and the settled cost of `to`, or
/// `None` when `to` is unreachable.
fn search(
    snapshot: &RoadSnapshot,
    config:   RouterConfig,
    from:     usize,
    to:       usize,
) -> Option<(Vec<Option<usize>>, f64)> {
    let n = snapshot.road_count();
    let mode = config.inference;

    // cost[p] = best known cost to reach the road at position p.
    let mut cost            = vec![f64::INFINITY; n];
    let mut prev            = vec![None; n];
    let mut settled         = vec![false; n];
    let mut back_referenced = vec![false; n];

    cost[from] = 0.0;

    while let Some(current) = select_min(&cost, &settled) {
        settled[current] = true;
        if current == to {
            break;
        }

        let road = snapshot.road(current);
        let invert = mode.inverts_back_references() && back_referenced[current];
        let mut edges = declared_edges(road, invert);

        let augmentation = mode.augment(snapshot, current);
        for p in augmentation.back_referenced {
            back_referenced[p] = true;
        }
        edges.extend(augmentation.edges);

        let departing = snapshot.congestion(current);
        trace!(road = %road.id, cost = cost[current], departing, edges = edges.len(), "expand");

        for edge in edges {
            let Some(next) = snapshot.position(edge.to) else {
                continue;
            };
            if settled[next] {
                continue;
            }
            let candidate = relax(cost[current], edge.distance, departing);
            if candidate < cost[next] {
                cost[next] = candidate;
                prev[next] = Some(current);
            }
        }
    }

    cost[to].is_finite().then(|| (prev, cost[to]))
}

/// The unsettled position with the lowest cost.  Ties go to the earliest
/// position (strict `<`).
#[inline]
fn select_min(cost: &[f64], settled: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for p in (0..cost.len()).filter(|&p| !settled[p]) {
        match best {
            Some(b) if cost[p] >= cost[b] => {}
            _ => best = Some(p),
        }
    }
    best
}

/// Walk `prev` back from `to`.  The chain must begin at `from`.
fn reconstruct(prev: &[Option<usize>], from: usize, to: usize) -> Option<Vec<usize>> {
    let mut chain = vec![to];
    let mut cur = to;
    while let Some(p) = prev[cur] {
        chain.push(p);
        if chain.len() > prev.len() {
            return None;
        }
        cur = p;
    }
    chain.reverse();
    (chain[0] == from).then_some(chain)
}

//! Immutable road snapshot used for one route computation.
//!
//! # Data layout
//!
//! Roads keep the order in which the store enumerated them.  That
//! **position** (a `usize`) is the index used by every per-road array in the
//! search (`cost`, `prev`, `settled`, …), and it is also the tie-break order
//! when several unsettled roads share the minimum cost.  Road ids are only
//! resolved to positions through [`RoadSnapshot::position`].
//!
//! Congestion is folded into one `f64` per road at construction time, so the
//! relaxation loop never touches the vehicle catalog.

use rustc_hash::FxHashMap;

use cr_core::{Road, RoadId, VehicleType, VehicleTypeId};

use crate::cost::congestion;
use crate::{RoutingError, RoutingResult};

/// A validated, position-indexed copy of the road set.
#[derive(Debug)]
pub struct RoadSnapshot {
    roads:      Vec<Road>,
    /// Departing-road congestion, indexed by position.
    congestion: Vec<f64>,
    index:      FxHashMap<RoadId, usize>,
}

impl RoadSnapshot {
    /// Validate `roads` against `vehicle_types` and build the snapshot.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::DuplicateVehicleType`] / [`RoutingError::DuplicateRoad`]
    /// - [`RoutingError::InvalidCongestionWeight`] for negative or non-finite weights
    /// - [`RoutingError::InvalidDistance`] for negative or non-finite distances
    /// - [`RoutingError::UnknownVehicleType`] for occupancy with no catalog entry
    pub fn new(roads: Vec<Road>, vehicle_types: &[VehicleType]) -> RoutingResult<Self> {
        let mut weights: FxHashMap<VehicleTypeId, f64> = FxHashMap::default();
        for vehicle in vehicle_types {
            if !(vehicle.congestion_value.is_finite() && vehicle.congestion_value >= 0.0) {
                return Err(RoutingError::InvalidCongestionWeight {
                    vehicle: vehicle.id,
                    weight:  vehicle.congestion_value,
                });
            }
            if weights.insert(vehicle.id, vehicle.congestion_value).is_some() {
                return Err(RoutingError::DuplicateVehicleType(vehicle.id));
            }
        }

        let mut index = FxHashMap::default();
        index.reserve(roads.len());
        let mut per_road = Vec::with_capacity(roads.len());

        for (pos, road) in roads.iter().enumerate() {
            if index.insert(road.id, pos).is_some() {
                return Err(RoutingError::DuplicateRoad(road.id));
            }
            if let Some(bad) = road
                .connections
                .iter()
                .find(|c| !(c.distance_value.is_finite() && c.distance_value >= 0.0))
            {
                return Err(RoutingError::InvalidDistance {
                    from:     road.id,
                    to:       bad.road_id,
                    distance: bad.distance_value,
                });
            }
            per_road.push(congestion(road, &weights)?);
        }

        Ok(Self { roads, congestion: per_road, index })
    }

    /// A snapshot with no roads.  Every query against it is empty.
    pub fn empty() -> Self {
        Self {
            roads:      Vec::new(),
            congestion: Vec::new(),
            index:      FxHashMap::default(),
        }
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Enumeration position of `id`, or `None` if the road is not in the set.
    #[inline]
    pub fn position(&self, id: RoadId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// The road at `pos`.  Panics if `pos >= road_count()`.
    #[inline]
    pub fn road(&self, pos: usize) -> &Road {
        &self.roads[pos]
    }

    /// All roads in enumeration order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Congestion charged when departing the road at `pos`.
    #[inline]
    pub fn congestion(&self, pos: usize) -> f64 {
        self.congestion[pos]
    }
}

//! Congestion payloads.
//!
//! [`RoadCongestion`] is both the element of a congestion update and the row
//! returned by the congestion listing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cr_core::{Occupancy, Road, RoadId, VehicleType};

use crate::ValidationError;

/// The vehicles currently on one road.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadCongestion {
    pub road_id: RoadId,
    pub vehicles: Vec<Occupancy>,
}

impl RoadCongestion {
    pub fn new(road_id: RoadId, vehicles: Vec<Occupancy>) -> Self {
        Self { road_id, vehicles }
    }
}

/// A full replacement of road occupancy.
///
/// Roads listed get exactly the given vehicles; roads not listed are cleared.
/// If a road is listed twice the last entry wins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CongestionUpdate {
    pub congestions: Vec<RoadCongestion>,
}

impl CongestionUpdate {
    pub fn new(congestions: Vec<RoadCongestion>) -> Self {
        Self { congestions }
    }

    /// Check every road and vehicle reference against the current data.
    pub fn validate(&self, roads: &[Road], vehicle_types: &[VehicleType]) -> Result<(), ValidationError> {
        for entry in &self.congestions {
            if !roads.iter().any(|r| r.id == entry.road_id) {
                return Err(ValidationError::UnknownRoad(entry.road_id));
            }
            if let Some(bad) = entry
                .vehicles
                .iter()
                .find(|o| !vehicle_types.iter().any(|v| v.id == o.vehicle_id))
            {
                return Err(ValidationError::UnknownVehicleType {
                    road:    entry.road_id,
                    vehicle: bad.vehicle_id,
                });
            }
        }
        Ok(())
    }

    /// Overwrite the occupancy of every road in `roads`.
    pub fn apply(self, roads: &mut [Road]) {
        let by_road: HashMap<RoadId, Vec<Occupancy>> = self
            .congestions
            .into_iter()
            .map(|c| (c.road_id, c.vehicles))
            .collect();

        for road in roads {
            road.vehicles = by_road.get(&road.id).cloned().unwrap_or_default();
        }
    }
}

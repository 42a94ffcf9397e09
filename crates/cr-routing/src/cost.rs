//! Cost model.
//!
//! Every edge `u -> v` with declared distance `d` costs
//! `d + congestion(u)`.  Congestion is charged to the road being **left**,
//! identically for all of its outgoing edges, never to the destination.

use rustc_hash::FxHashMap;

use cr_core::{Road, VehicleTypeId};

use crate::{RoutingError, RoutingResult};

/// Sum of `amount × congestion_value` over the occupancy entries of `road`.
///
/// `weights` maps each known vehicle type to its congestion weight.  An
/// occupancy entry naming an unknown type is an inconsistent snapshot.
pub fn congestion(road: &Road, weights: &FxHashMap<VehicleTypeId, f64>) -> RoutingResult<f64> {
    road.vehicles.iter().try_fold(0.0, |total, occupancy| {
        let weight = weights
            .get(&occupancy.vehicle_id)
            .ok_or(RoutingError::UnknownVehicleType {
                road:    road.id,
                vehicle: occupancy.vehicle_id,
            })?;
        Ok(total + weight * f64::from(occupancy.amount))
    })
}

/// Candidate cost of reaching a neighbour from a road settled at `cost`.
#[inline]
pub fn relax(cost: f64, distance: f64, departing_congestion: f64) -> f64 {
    cost + distance + departing_congestion
}

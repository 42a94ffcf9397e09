//! Routing-subsystem error type.
//!
//! Route queries themselves never fail: an unknown start/end road or a
//! disconnected graph yields an empty [`Route`](crate::Route).  Errors are
//! reserved for snapshots that break the road/vehicle invariants.

use thiserror::Error;

use cr_core::{RoadId, VehicleTypeId};

/// Errors produced by `cr-routing` while building a [`RoadSnapshot`](crate::RoadSnapshot).
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("road {0} appears more than once in the snapshot")]
    DuplicateRoad(RoadId),

    #[error("vehicle type {0} appears more than once in the catalog")]
    DuplicateVehicleType(VehicleTypeId),

    #[error("connection {from} -> {to} has invalid distance {distance}")]
    InvalidDistance { from: RoadId, to: RoadId, distance: f64 },

    #[error("vehicle type {vehicle} has invalid congestion weight {weight}")]
    InvalidCongestionWeight { vehicle: VehicleTypeId, weight: f64 },

    #[error("road {road} carries unknown vehicle type {vehicle}")]
    UnknownVehicleType { road: RoadId, vehicle: VehicleTypeId },
}

pub type RoutingResult<T> = Result<T, RoutingError>;

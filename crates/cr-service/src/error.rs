use cr_core::{RoadId, VehicleTypeId};
use cr_routing::RoutingError;
use cr_store::StoreError;
use thiserror::Error;

/// A congestion update that was rejected before touching the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("road {0} does not exist")]
    UnknownRoad(RoadId),

    #[error("road {road}: vehicle type {vehicle} does not exist")]
    UnknownVehicleType { road: RoadId, vehicle: VehicleTypeId },
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store failures are passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("inconsistent road snapshot: {0}")]
    Routing(#[from] RoutingError),

    #[error("invalid congestion update: {0}")]
    Validation(#[from] ValidationError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

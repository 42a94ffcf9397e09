//! Store contracts.
//!
//! Implementations must make [`RoadStore::replace_all_roads`] appear atomic:
//! a concurrent [`RoadStore::list_roads`] observes either the complete prior
//! road set or the complete new one.

use std::sync::Arc;

use cr_core::{Road, RoadId, VehicleType};

use crate::StoreResult;

/// Owner of the road set: connections plus current occupancy.
pub trait RoadStore: Send + Sync {
    /// All roads, in the store's enumeration order.
    fn list_roads(&self) -> StoreResult<Vec<Road>>;

    /// The road with `id`, or `None`.
    fn get_road(&self, id: RoadId) -> StoreResult<Option<Road>>;

    /// Replace the whole road set.
    fn replace_all_roads(&self, roads: Vec<Road>) -> StoreResult<()>;
}

/// Read-only catalog of vehicle types and their congestion weights.
pub trait VehicleCatalog: Send + Sync {
    fn list_vehicle_types(&self) -> StoreResult<Vec<VehicleType>>;
}

impl<T: RoadStore + ?Sized> RoadStore for Arc<T> {
    fn list_roads(&self) -> StoreResult<Vec<Road>> {
        (**self).list_roads()
    }

    fn get_road(&self, id: RoadId) -> StoreResult<Option<Road>> {
        (**self).get_road(id)
    }

    fn replace_all_roads(&self, roads: Vec<Road>) -> StoreResult<()> {
        (**self).replace_all_roads(roads)
    }
}

impl<T: VehicleCatalog + ?Sized> VehicleCatalog for Arc<T> {
    fn list_vehicle_types(&self) -> StoreResult<Vec<VehicleType>> {
        (**self).list_vehicle_types()
    }
}

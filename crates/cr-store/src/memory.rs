//! In-memory store implementations.
//!
//! The road set is held as `RwLock<Arc<Vec<Road>>>`.  Readers clone the
//! `Arc` under the read lock and copy the roads after releasing it; writers
//! swap in a fresh `Arc` under the write lock.  A reader therefore always
//! sees one complete road set.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use cr_core::{Road, RoadId, VehicleType};

use crate::seed;
use crate::{RoadStore, StoreResult, VehicleCatalog};

// ── InMemoryRoadStore ─────────────────────────────────────────────────────────

/// Process-local road store.  `Default` seeds it with [`seed::default_roads`].
pub struct InMemoryRoadStore {
    roads: RwLock<Arc<Vec<Road>>>,
}

impl InMemoryRoadStore {
    pub fn new(roads: Vec<Road>) -> Self {
        Self { roads: RwLock::new(Arc::new(roads)) }
    }

    /// Number of roads currently stored.
    pub fn len(&self) -> usize {
        self.roads.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.read().is_empty()
    }

    fn current(&self) -> Arc<Vec<Road>> {
        self.roads.read().clone()
    }
}

impl Default for InMemoryRoadStore {
    fn default() -> Self {
        Self::new(seed::default_roads())
    }
}

impl RoadStore for InMemoryRoadStore {
    fn list_roads(&self) -> StoreResult<Vec<Road>> {
        Ok(self.current().to_vec())
    }

    fn get_road(&self, id: RoadId) -> StoreResult<Option<Road>> {
        Ok(self.current().iter().find(|r| r.id == id).cloned())
    }

    fn replace_all_roads(&self, roads: Vec<Road>) -> StoreResult<()> {
        let count = roads.len();
        *self.roads.write() = Arc::new(roads);
        debug!(roads = count, "road set replaced");
        Ok(())
    }
}

// ── InMemoryVehicleCatalog ────────────────────────────────────────────────────

/// Fixed vehicle catalog.  `Default` seeds it with
/// [`seed::default_vehicle_types`].
pub struct InMemoryVehicleCatalog {
    vehicle_types: Vec<VehicleType>,
}

impl InMemoryVehicleCatalog {
    pub fn new(vehicle_types: Vec<VehicleType>) -> Self {
        Self { vehicle_types }
    }
}

impl Default for InMemoryVehicleCatalog {
    fn default() -> Self {
        Self::new(seed::default_vehicle_types())
    }
}

impl VehicleCatalog for InMemoryVehicleCatalog {
    fn list_vehicle_types(&self) -> StoreResult<Vec<VehicleType>> {
        Ok(self.vehicle_types.clone())
    }
}

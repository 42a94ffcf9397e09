//! Road network domain model.
//!
//! The shapes here are exactly what the stores hand out and what the route
//! engine consumes as a snapshot.  Field names follow the JSON documents the
//! stores load (`road_id`, `distance_value`, `vehicle_id`, `amount`,
//! `congestion_value`), so the serde form round-trips without renames.
//!
//! Connections are recorded only on the originating road.  A missing reverse
//! entry does **not** mean the reverse link is physically absent; the routing
//! crate decides how to treat that (see `cr_routing::topology`).

use crate::{RoadId, VehicleTypeId};

// ── Connection ────────────────────────────────────────────────────────────────

/// A directed, weighted edge from the owning road to `road_id`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    /// Target road.
    pub road_id: RoadId,
    /// Physical distance.  Non-negative.
    pub distance_value: f64,
}

impl Connection {
    pub fn new(road_id: RoadId, distance_value: f64) -> Self {
        Self { road_id, distance_value }
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// How many vehicles of one type are currently on a road.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupancy {
    pub vehicle_id: VehicleTypeId,
    pub amount: u32,
}

impl Occupancy {
    pub fn new(vehicle_id: VehicleTypeId, amount: u32) -> Self {
        Self { vehicle_id, amount }
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// A road segment: a node of the network graph.
///
/// `name` is a display label and is **not** guaranteed unique.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub id: RoadId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connections: Vec<Connection>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vehicles: Vec<Occupancy>,
}

impl Road {
    /// A road with no connections and no occupancy.
    pub fn new(id: RoadId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            connections: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Builder-style: append a declared connection to `to`.
    pub fn connect(mut self, to: RoadId, distance_value: f64) -> Self {
        self.connections.push(Connection::new(to, distance_value));
        self
    }

    /// Builder-style: append an occupancy entry.
    pub fn with_vehicles(mut self, vehicle_id: VehicleTypeId, amount: u32) -> Self {
        self.vehicles.push(Occupancy::new(vehicle_id, amount));
        self
    }

    /// `true` if any vehicles are currently recorded on this road.
    #[inline]
    pub fn has_occupancy(&self) -> bool {
        !self.vehicles.is_empty()
    }

    /// The declared distance to `to`, if this road lists a connection to it.
    ///
    /// With several connections to the same target the first one wins.
    pub fn distance_to(&self, to: RoadId) -> Option<f64> {
        self.connections
            .iter()
            .find(|c| c.road_id == to)
            .map(|c| c.distance_value)
    }
}

// ── VehicleType ───────────────────────────────────────────────────────────────

/// A vehicle type and the congestion it adds per unit on a road.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleType {
    pub id: VehicleTypeId,
    pub name: String,
    /// Cost added per vehicle of this type when departing a road.
    pub congestion_value: f64,
}

impl VehicleType {
    pub fn new(id: VehicleTypeId, name: impl Into<String>, congestion_value: f64) -> Self {
        Self { id, name: name.into(), congestion_value }
    }
}

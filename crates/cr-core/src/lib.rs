//! `cr-core`: foundational types for the `congestion_router` workspace.
//!
//! This crate is a dependency of every other `cr-*` crate.  It has no `cr-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `RoadId`, `VehicleTypeId`                                 |
//! | [`model`]   | `Road`, `Connection`, `Occupancy`, `VehicleType`          |
//! | [`error`]   | `CrError`, `CrResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types, using  |
//! |         | the wire field names of the road/vehicle JSON documents.   |

pub mod error;
pub mod ids;
pub mod model;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CrError, CrResult};
pub use ids::{RoadId, VehicleTypeId};
pub use model::{Connection, Occupancy, Road, VehicleType};

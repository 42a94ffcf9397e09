//! `cr-store`: where roads and vehicle types live between queries.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`store`]  | `RoadStore`, `VehicleCatalog` traits                            |
//! | [`memory`] | `InMemoryRoadStore`, `InMemoryVehicleCatalog`                   |
//! | [`seed`]   | the default twelve-road neighbourhood and vehicle catalog       |
//! | [`loader`] | JSON and CSV loading, JSON saving                               |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                                  |
//!
//! The route engine never talks to a store directly: `cr-service` reads a
//! snapshot through these traits and hands plain data to `cr-routing`.

pub mod error;
pub mod loader;
pub mod memory;
pub mod seed;
pub mod store;


pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryRoadStore, InMemoryVehicleCatalog};
pub use store::{RoadStore, VehicleCatalog};

//! `cr-routing`: road snapshot, congestion cost model, and route finding.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`snapshot`] | `RoadSnapshot`, immutable, position-indexed road set         |
//! | [`cost`]     | per-road congestion and edge cost                            |
//! | [`topology`] | `InferenceMode`, declared and inferred outgoing edges        |
//! | [`router`]   | `Router` trait, `Route`, `RouteFinder`                       |
//! | [`config`]   | `RouterConfig`                                               |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config and `Route`.     |

pub mod config;
pub mod cost;
pub mod error;
pub mod router;
pub mod snapshot;
pub mod topology;


pub use config::RouterConfig;
pub use error::{RoutingError, RoutingResult};
pub use router::{Route, RouteFinder, Router};
pub use snapshot::RoadSnapshot;
pub use topology::{Augmentation, Edge, InferenceMode};

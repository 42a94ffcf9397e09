//! `cr-service`: the use cases behind the road and vehicle endpoints.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`service`] | `TrafficService<S, C, R>`, one method per use case            |
//! | [`payload`] | `CongestionUpdate`, `RoadCongestion` and their validation     |
//! | [`error`]   | `ServiceError`, `ValidationError`, `ServiceResult<T>`         |
//!
//! Every call reads a fresh snapshot from the stores; the service itself
//! keeps no road or vehicle state.

pub mod error;
pub mod payload;
pub mod service;


pub use error::{ServiceError, ServiceResult, ValidationError};
pub use payload::{CongestionUpdate, RoadCongestion};
pub use service::TrafficService;

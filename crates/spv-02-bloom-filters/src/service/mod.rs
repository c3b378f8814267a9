//! Service Layer
//!
//! The filter consumer: owns one filter, populates it from a watch list and
//! answers membership queries while recording metrics.

pub mod filter_service;

pub use filter_service::FilterService;

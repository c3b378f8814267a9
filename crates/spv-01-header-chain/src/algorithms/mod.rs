//! # Algorithms Module
//!
//! Locator construction and batch application.

pub mod header_sync;
pub mod locator;

pub use header_sync::{apply_headers, BatchOutcome};
pub use locator::{build_locator, LOCATOR_DENSE_WINDOW};

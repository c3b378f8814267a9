//! # Integration Flows
//!
//! End-to-end scenarios across the header chain, filter, and telemetry crates.

pub mod filter_flow;
pub mod header_sync_flow;

//! # SPV Test Suite
//!
//! Workspace-level tests that drive several crates together.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs      # Header chain builders shared by flows and benches
//! │   └── integration/     # Cross-crate flows
//! │       ├── header_sync_flow.rs
//! │       └── filter_flow.rs
//! └── benches/
//!     └── spv_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p spv-tests
//!
//! # By flow
//! cargo test -p spv-tests integration::header_sync_flow
//!
//! # Benchmarks
//! cargo bench -p spv-tests
//! ```

pub mod fixtures;
pub mod integration;

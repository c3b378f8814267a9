//! # Domain Module
//!
//! Core domain types for the header chain index.

pub mod chain_index;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use chain_index::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;

//! Configuration types
//!
//! The animation table is consulted once, when the manager is initialised.

pub mod types;

pub use types::*;

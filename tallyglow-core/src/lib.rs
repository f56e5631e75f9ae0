//! Board-agnostic animation core for the Tallyglow counter display
//!
//! This crate contains all logic that does not depend on a specific panel
//! or network stack:
//!
//! - Display surface and counter source traits
//! - Animation styles and their per-style render state
//! - Animation manager (rotation state machine)
//! - Color and glyph layout helpers
//! - Configuration type definitions
//! - Outer tick loop driver

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod animation;
pub mod color;
pub mod config;
pub mod counter;
pub mod random;
pub mod runner;
pub mod time;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

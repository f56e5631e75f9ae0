//! Collaborator traits
//!
//! These traits define the interface between the animation logic and the
//! panel driver or data feed behind it.

pub mod counter;
pub mod surface;

pub use counter::CounterSource;
pub use surface::PixelSurface;

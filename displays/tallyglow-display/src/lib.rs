//! Frame buffer and panel abstraction for Tallyglow
//!
//! This crate provides:
//! - `FrameBuffer`, an in-memory RGB565 pixel buffer implementing the core
//!   `PixelSurface` trait
//! - A 5x7 digit font used to render counter glyphs at any integer scale
//! - `PanelBackend` trait for pushing finished frames to hardware
//!
//! # Architecture
//!
//! Animations draw into the frame buffer every tick. When the animation
//! manager reports that a refresh is needed, the board code calls
//! [`FrameBuffer::present`] with its panel driver, which streams the frame
//! row by row and latches it. Frames that were not touched since the last
//! present are skipped.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod backend;
pub mod font;
pub mod framebuffer;

// Re-export key types
pub use backend::{DisplayError, PanelBackend};
pub use framebuffer::{BoundingBox, FrameBuffer, Hub75Frame};

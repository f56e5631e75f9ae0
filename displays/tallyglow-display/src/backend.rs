//! Panel backend trait
//!
//! Defines the interface a matrix panel driver implements to receive frames.

use core::fmt;

use tallyglow_core::color::Rgb565;

/// Panel backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Row index or frame size does not match the panel
    InvalidCoordinates,
    /// Panel not initialized
    NotReady,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("panel communication error"),
            DisplayError::InvalidCoordinates => f.write_str("frame does not match panel size"),
            DisplayError::NotReady => f.write_str("panel not ready"),
        }
    }
}

/// Panel backend trait
///
/// Hardware-agnostic sink for full frames. A HUB75 driver would shift each
/// row out to its column drivers; a simulator might copy it into a window.
pub trait PanelBackend {
    /// Panel dimensions in pixels as (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Stage one row of pixels
    ///
    /// `pixels` holds exactly one panel row, left to right.
    fn write_row(&mut self, row: u16, pixels: &[Rgb565]) -> Result<(), DisplayError>;

    /// Make the staged rows visible
    fn latch(&mut self) -> Result<(), DisplayError>;

    /// Check if the panel is ready to accept a frame
    fn is_ready(&self) -> bool;
}

impl<T: PanelBackend + ?Sized> PanelBackend for &mut T {
    fn dimensions(&self) -> (u16, u16) {
        (**self).dimensions()
    }

    fn write_row(&mut self, row: u16, pixels: &[Rgb565]) -> Result<(), DisplayError> {
        (**self).write_row(row, pixels)
    }

    fn latch(&mut self) -> Result<(), DisplayError> {
        (**self).latch()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

//! Error types for the rendering core
//!
//! Drawing operations never fail: out-of-bounds coordinates are clipped,
//! unknown character codes render as zero-width (see the crate docs).
//! Errors only exist at the two fallible boundaries:
//!
//! - [`BuilderError`] - construction of dimensions, configuration, and
//!   framebuffers
//! - [`InterfaceError`] - low-level bus communication in
//!   [`Interface`](crate::interface::Interface)
//!
//! ## Example
//!
//! ```
//! use monogfx::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(0, 48);
//! assert!(result.is_err());
//! ```

use core::fmt::Debug;

/// Errors that can occur when building configuration or framebuffers
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be
    /// called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// Both sides must be non-zero.
    InvalidDimensions {
        /// Width (columns) requested
        width: u16,
        /// Height (rows) requested
        height: u16,
    },
    /// Backing buffer is too small for the surface
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height}")
            }
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur at the bus interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

//! Monochrome rendering core for page-addressed displays
//!
//! A device-independent framebuffer and drawing engine for the small
//! monochrome controllers that pack 8 vertical pixels per byte (PCD8544,
//! SSD1306, and friends). The crate renders into memory and tracks the
//! dirty window; a thin device-specific [`Transport`] pushes the changed
//! bytes over the bus.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocator required
//! - Bit-packed framebuffer over caller-provided storage
//! - Dirty-window tracking so flushes only move the bytes that changed
//! - Lines (integer Bresenham), rectangles, filled rectangles
//! - Proportional bitmap font rendering with integer scaling and a
//!   line-wrapping text cursor (`core::fmt::Write`)
//! - Packed monochrome bitmap blitting
//! - `embedded-graphics` integration (with `graphics` feature)
//! - `embedded-hal` v1.0 SPI command/data plumbing for transports
//!
//! ## Usage
//!
//! ```rust
//! use core::fmt::Write;
//! use monogfx::{Builder, Canvas, Color, Dimensions};
//!
//! # struct MockTransport;
//! # impl monogfx::Transport for MockTransport {
//! #     type Error = core::convert::Infallible;
//! #     fn write_window(
//! #         &mut self,
//! #         _frame: &[u8],
//! #         _window: monogfx::Window,
//! #         _dimensions: monogfx::Dimensions,
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let dims = match Dimensions::new(84, 48) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut canvas = Canvas::new(config, [0u8; 84 * 48 / 8]);
//!
//! // Blank the panel before the first real frame.
//! let mut transport = MockTransport;
//! let _ = canvas.begin(&mut transport);
//!
//! // Draw, then push only what changed.
//! canvas.draw_rect(0, 0, 84, 48, Color::On);
//! canvas.set_cursor(4, 4);
//! let _ = write!(canvas, "Hello");
//! let _ = canvas.flush(&mut transport);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Drawing engine and text stream
pub mod canvas;
/// Pixel and paint-decision types
pub mod color;
/// Surface configuration types and builder
pub mod config;
/// Error types for the rendering core
pub mod error;
/// Bitmap font tables
pub mod font;
/// Bit-packed framebuffer and dirty-window tracking
pub mod framebuffer;
/// Transport boundary and SPI bus plumbing
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use canvas::{Canvas, TextStyle};
pub use color::{Color, Paint};
pub use config::{Builder, Config, Dimensions};
pub use error::{BuilderError, InterfaceError};
pub use font::{FONT_5X7, Font};
pub use framebuffer::{Framebuffer, Window};
pub use interface::{Interface, Transport};

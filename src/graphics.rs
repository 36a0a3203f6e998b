//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait
//! from the embedded-graphics ecosystem directly on [`Canvas`], so the
//! crate's own primitives and the ecosystem's shapes, images, and text
//! styles can be mixed freely on the same surface. Both paths funnel
//! through the same clipped pixel write and therefore maintain the dirty
//! window identically.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use monogfx::{Builder, Canvas, Color, Dimensions};
//!
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
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(30, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Color::On))
//!     .draw(&mut canvas);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::canvas::Canvas;
use crate::color::Color;

impl<B> DrawTarget for Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // draw_pixel clips, matching the DrawTarget contract that
        // out-of-bounds pixels are discarded.
        for Pixel(Point { x, y }, color) in pixels {
            self.draw_pixel(x, y, color);
        }

        Ok(())
    }
}

impl<B> OriginDimensions for Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

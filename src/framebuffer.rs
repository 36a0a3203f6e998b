//! Bit-packed framebuffer and dirty-window tracking
//!
//! The framebuffer stores one bit per pixel in the page-major layout the
//! PCD8544/SSD1306 controller family expects: each byte holds 8 vertically
//! stacked pixels of one column, pages of 8 rows are laid out row-major,
//! so pixel `(x, y)` lives at byte `x + (y / 8) * width`, bit `y % 8`.
//!
//! Alongside the pixels the framebuffer maintains a [`Window`]: the
//! smallest rectangle covering every pixel written since the last flush.
//! Transports read it to push only the bytes that changed.
//!
//! ## Example
//!
//! ```
//! use monogfx::{Color, Dimensions, Framebuffer};
//!
//! let dims = match Dimensions::new(16, 16) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = Framebuffer::new(dims, [0u8; 32]);
//!
//! // A fresh framebuffer marks the whole surface dirty; start tracking
//! // from a clean slate.
//! fb.reset_window(false);
//!
//! fb.set(3, 10, Color::On);
//! assert_eq!(fb.get(3, 10), Some(Color::On));
//!
//! // Byte 3 of page 1, bit 2.
//! assert_eq!(fb.bytes()[16 + 3], 0b0000_0100);
//!
//! let window = fb.window();
//! assert_eq!((window.x0, window.y0, window.x1, window.y1), (3, 10, 4, 11));
//! ```

use crate::color::Color;
use crate::config::Dimensions;
use crate::error::BuilderError;

/// Bounding rectangle of pixels changed since the last flush
///
/// Upper bounds are half-open: the window covers columns `x0..x1` and rows
/// `y0..y1`. The window is empty exactly when either axis has zero extent;
/// expanding an empty window seeds it to the single written pixel, so the
/// bounds are always the tight bounding box of the writes since the last
/// reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    /// First dirty column
    pub x0: u16,
    /// First dirty row
    pub y0: u16,
    /// One past the last dirty column
    pub x1: u16,
    /// One past the last dirty row
    pub y1: u16,
}

impl Window {
    /// An empty window
    pub const fn empty() -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: 0,
            y1: 0,
        }
    }

    /// A window covering the whole surface
    pub fn full(dimensions: Dimensions) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: dimensions.width,
            y1: dimensions.height,
        }
    }

    /// Whether the window covers no pixels
    pub fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }

    /// Grow the window to include a pixel
    pub fn expand(&mut self, x: u16, y: u16) {
        if self.is_empty() {
            self.x0 = x;
            self.x1 = x + 1;
            self.y0 = y;
            self.y1 = y + 1;
            return;
        }

        if x < self.x0 {
            self.x0 = x;
        }
        if x + 1 > self.x1 {
            self.x1 = x + 1;
        }

        if y < self.y0 {
            self.y0 = y;
        }
        if y + 1 > self.y1 {
            self.y1 = y + 1;
        }
    }

    /// The 8-row pages the window spans
    ///
    /// Transports iterate this range and stream, per page, the bytes
    /// addressed by [`Dimensions::page_span`] for columns `x0..x1`.
    pub fn pages(&self) -> core::ops::Range<u16> {
        self.y0 / 8..self.y1.div_ceil(8)
    }

    /// The columns the window spans
    pub fn columns(&self) -> core::ops::Range<u16> {
        self.x0..self.x1
    }
}

/// Bit-packed monochrome framebuffer with dirty-window tracking
///
/// Generic over the backing storage so it works with plain arrays on
/// heapless targets and `Vec<u8>` where an allocator exists. The buffer
/// must be at least [`Dimensions::buffer_size`] bytes; trailing excess is
/// ignored.
pub struct Framebuffer<B> {
    /// Surface dimensions
    dimensions: Dimensions,
    /// Backing storage, page-major
    buffer: B,
    /// Dirty window since the last flush
    window: Window,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a framebuffer over a backing buffer
    ///
    /// The dirty window starts out covering the whole surface so the first
    /// flush pushes a deterministic full frame.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than `dimensions.buffer_size()`.
    pub fn new(dimensions: Dimensions, buffer: B) -> Self {
        let required = dimensions.buffer_size();
        assert!(
            buffer.as_ref().len() >= required,
            "buffer too small: required {} bytes, got {}",
            required,
            buffer.as_ref().len()
        );
        Self {
            dimensions,
            buffer,
            window: Window::full(dimensions),
        }
    }

    /// Fallible version of [`new`](Self::new)
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if the buffer is smaller
    /// than `dimensions.buffer_size()`.
    pub fn try_new(dimensions: Dimensions, buffer: B) -> Result<Self, BuilderError> {
        let required = dimensions.buffer_size();
        if buffer.as_ref().len() < required {
            return Err(BuilderError::BufferTooSmall {
                required,
                provided: buffer.as_ref().len(),
            });
        }
        Ok(Self {
            dimensions,
            buffer,
            window: Window::full(dimensions),
        })
    }

    /// Surface dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Write one pixel
    ///
    /// Out-of-bounds coordinates are ignored. Every in-bounds write
    /// expands the dirty window, whether or not the stored bit changes.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0
            || y < 0
            || x >= i32::from(self.dimensions.width)
            || y >= i32::from(self.dimensions.height)
        {
            return;
        }
        let (x, y) = (x as u16, y as u16);

        let index = usize::from(x) + usize::from(y / 8) * usize::from(self.dimensions.width);
        let mask = 1u8 << (y % 8);
        if color.is_on() {
            self.buffer.as_mut()[index] |= mask;
        } else {
            self.buffer.as_mut()[index] &= !mask;
        }

        self.window.expand(x, y);
    }

    /// Read one pixel
    ///
    /// Returns `None` for out-of-bounds coordinates.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0
            || y < 0
            || x >= i32::from(self.dimensions.width)
            || y >= i32::from(self.dimensions.height)
        {
            return None;
        }
        let (x, y) = (x as u16, y as u16);

        let index = usize::from(x) + usize::from(y / 8) * usize::from(self.dimensions.width);
        let mask = 1u8 << (y % 8);
        Some(Color::from(self.buffer.as_ref()[index] & mask != 0))
    }

    /// Zero all pixels and mark the whole surface dirty
    pub fn clear(&mut self) {
        for byte in &mut self.buffer.as_mut()[..self.dimensions.buffer_size()] {
            *byte = 0;
        }
        self.window = Window::full(self.dimensions);
    }

    /// The backing bytes, page-major, restricted to the surface
    pub fn bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    /// The current dirty window
    pub fn window(&self) -> Window {
        self.window
    }

    /// Reset the dirty window
    ///
    /// `whole == true` marks the entire surface dirty; `whole == false`
    /// empties the window. Transports call the latter after a successful
    /// flush.
    pub fn reset_window(&mut self, whole: bool) {
        self.window = if whole {
            Window::full(self.dimensions)
        } else {
            Window::empty()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fb() -> Framebuffer<[u8; 32]> {
        let dims = Dimensions::new(16, 16).unwrap();
        let mut fb = Framebuffer::new(dims, [0u8; 32]);
        fb.reset_window(false);
        fb
    }

    #[test]
    fn test_pixel_round_trip() {
        let mut fb = test_fb();
        for y in 0..16 {
            for x in 0..16 {
                fb.set(x, y, Color::On);
                assert_eq!(fb.get(x, y), Some(Color::On));
                fb.set(x, y, Color::Off);
                assert_eq!(fb.get(x, y), Some(Color::Off));
            }
        }
    }

    #[test]
    fn test_page_major_packing() {
        let mut fb = test_fb();
        fb.set(3, 10, Color::On);
        // Page 1 (rows 8-15), column 3, bit 2.
        assert_eq!(fb.bytes()[16 + 3], 0b0000_0100);
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut fb = test_fb();
        fb.set(-1, 0, Color::On);
        fb.set(0, -1, Color::On);
        fb.set(16, 0, Color::On);
        fb.set(0, 16, Color::On);
        fb.set(i32::from(u16::MAX) + 6, 0, Color::On);

        assert!(fb.bytes().iter().all(|byte| *byte == 0));
        assert!(fb.window().is_empty());
    }

    #[test]
    fn test_out_of_bounds_reads_return_none() {
        let fb = test_fb();
        assert_eq!(fb.get(-1, 0), None);
        assert_eq!(fb.get(16, 0), None);
        assert_eq!(fb.get(0, 16), None);
    }

    #[test]
    fn test_window_seeds_to_single_pixel() {
        let mut fb = test_fb();
        fb.set(5, 3, Color::On);
        assert_eq!(
            fb.window(),
            Window {
                x0: 5,
                y0: 3,
                x1: 6,
                y1: 4
            }
        );
    }

    #[test]
    fn test_window_is_tight_bounding_box() {
        let mut fb = test_fb();
        fb.set(5, 3, Color::On);
        fb.set(2, 9, Color::Off);
        fb.set(12, 7, Color::On);
        assert_eq!(
            fb.window(),
            Window {
                x0: 2,
                y0: 3,
                x1: 13,
                y1: 10
            }
        );
    }

    #[test]
    fn test_window_grows_on_unchanged_writes() {
        // Writing the value a pixel already holds still dirties it.
        let mut fb = test_fb();
        fb.set(4, 4, Color::Off);
        assert!(!fb.window().is_empty());
    }

    #[test]
    fn test_reset_window() {
        let mut fb = test_fb();
        fb.set(5, 5, Color::On);

        fb.reset_window(false);
        assert!(fb.window().is_empty());

        fb.reset_window(true);
        assert_eq!(fb.window(), Window::full(fb.dimensions()));
        assert!(!fb.window().is_empty());
    }

    #[test]
    fn test_clear_zeroes_and_marks_whole_surface() {
        let mut fb = test_fb();
        fb.set(5, 5, Color::On);
        fb.clear();

        assert!(fb.bytes().iter().all(|byte| *byte == 0));
        assert_eq!(fb.window(), Window::full(fb.dimensions()));
    }

    #[test]
    fn test_window_pages_span() {
        let mut window = Window::empty();
        window.expand(3, 3);
        window.expand(3, 12);
        assert_eq!(window.pages(), 0..2);

        let mut window = Window::empty();
        window.expand(0, 9);
        assert_eq!(window.pages(), 1..2);
    }

    #[test]
    fn test_new_accepts_oversized_buffer() {
        let dims = Dimensions::new(16, 16).unwrap();
        let fb = Framebuffer::new(dims, [0u8; 64]);
        assert_eq!(fb.bytes().len(), 32);
    }

    #[test]
    #[should_panic(expected = "buffer too small")]
    fn test_new_panics_on_small_buffer() {
        let dims = Dimensions::new(16, 16).unwrap();
        let _ = Framebuffer::new(dims, [0u8; 31]);
    }

    #[test]
    fn test_try_new_small_buffer_returns_error() {
        let dims = Dimensions::new(16, 16).unwrap();
        let result = Framebuffer::try_new(dims, [0u8; 31]);
        assert!(matches!(
            result,
            Err(BuilderError::BufferTooSmall {
                required: 32,
                provided: 31
            })
        ));
    }
}

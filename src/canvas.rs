//! Rendering engine: primitives, glyphs, bitmaps, and text
//!
//! [`Canvas`] owns a [`Framebuffer`] and builds every drawing operation on
//! top of its clipped single-pixel write: lines, rectangles, font glyphs,
//! packed bitmaps, and a cursor-driven text stream. Nothing here touches
//! hardware; [`Canvas::flush`] hands the dirty window to a [`Transport`]
//! when the caller decides the frame is ready.
//!
//! Drawing operations are infallible. Coordinates outside the surface are
//! clipped pixel by pixel, unknown character codes render as zero-width,
//! and cursor moves outside the surface are ignored.
//!
//! ## Example
//!
//! ```
//! use core::fmt::Write;
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
//! canvas.draw_rect(0, 0, 84, 48, Color::On);
//! canvas.draw_line(0, 0, 83, 47, Color::On);
//!
//! canvas.set_cursor(4, 4);
//! let _ = write!(canvas, "12:{:02}", 5);
//! ```

use core::fmt;

use crate::color::{Color, Paint};
use crate::config::{Config, Dimensions};
use crate::error::BuilderError;
use crate::font::{Font, GLYPH_HEIGHT};
use crate::framebuffer::Framebuffer;
use crate::interface::Transport;

/// Text rendering style
///
/// Three independent knobs: the glyph color, whether background pixels
/// inside the glyph cell are painted with the inverse color or left
/// untouched, and an integer magnification factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Color of the glyph's foreground pixels
    pub color: Color,
    /// Leave background pixels untouched instead of painting the inverse
    pub transparent: bool,
    /// Integer magnification, 1 = native size
    pub scale: u8,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::On,
            transparent: true,
            scale: 1,
        }
    }
}

/// Monochrome drawing surface with a text cursor
///
/// Generic over the backing storage like [`Framebuffer`]. All drawing
/// funnels through the framebuffer's clipped pixel write, so every
/// operation also maintains the dirty window for the next flush.
pub struct Canvas<B> {
    /// Pixel storage and dirty-window tracking
    framebuffer: Framebuffer<B>,
    /// Glyph tables for text rendering
    font: Font<'static>,
    /// Text cursor, x in pixels from the left
    cursor_x: u16,
    /// Text cursor, y in pixels from the top
    cursor_y: u16,
    /// Current text style
    style: TextStyle,
}

impl<B> Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a canvas over a backing buffer
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than
    /// `config.dimensions.buffer_size()`.
    pub fn new(config: Config, buffer: B) -> Self {
        Self {
            framebuffer: Framebuffer::new(config.dimensions, buffer),
            font: config.font,
            cursor_x: 0,
            cursor_y: 0,
            style: TextStyle::default(),
        }
    }

    /// Fallible version of [`new`](Self::new)
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if the buffer is smaller
    /// than `config.dimensions.buffer_size()`.
    pub fn try_new(config: Config, buffer: B) -> Result<Self, BuilderError> {
        Ok(Self {
            framebuffer: Framebuffer::try_new(config.dimensions, buffer)?,
            font: config.font,
            cursor_x: 0,
            cursor_y: 0,
            style: TextStyle::default(),
        })
    }

    /// Surface dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.framebuffer.dimensions()
    }

    /// Access the underlying framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Access the underlying framebuffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Write one pixel, clipped to the surface
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.framebuffer.set(x, y, color);
    }

    /// Draw a vertical line of `length` pixels going down from `(x, y)`
    pub fn draw_vline(&mut self, x: i32, y: i32, length: u16, color: Color) {
        for i in 0..i32::from(length) {
            self.draw_pixel(x, y + i, color);
        }
    }

    /// Draw a horizontal line of `length` pixels going right from `(x, y)`
    pub fn draw_hline(&mut self, x: i32, y: i32, length: u16, color: Color) {
        for i in 0..i32::from(length) {
            self.draw_pixel(x + i, y, color);
        }
    }

    /// Draw a line between two points
    ///
    /// Integer Bresenham stepping. Lines steeper than 45 degrees are
    /// walked along the y axis, everything else along x, so the stepping
    /// axis is always the one with the larger extent.
    pub fn draw_line(&mut self, mut x0: i32, mut y0: i32, mut x1: i32, mut y1: i32, color: Color) {
        let steep = (y1 - y0).abs() > (x1 - x0).abs();

        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }

        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();

        let mut err = dx / 2;
        let ystep = if y0 < y1 { 1 } else { -1 };
        let mut y = y0;

        for x in x0..=x1 {
            if steep {
                self.draw_pixel(y, x, color);
            } else {
                self.draw_pixel(x, y, color);
            }

            err -= dy;

            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// Draw a rectangle outline
    pub fn draw_rect(&mut self, x: i32, y: i32, width: u16, height: u16, color: Color) {
        if width == 0 || height == 0 {
            return;
        }
        self.draw_hline(x, y, width, color);
        self.draw_hline(x, y + i32::from(height) - 1, width, color);
        self.draw_vline(x, y, height, color);
        self.draw_vline(x + i32::from(width) - 1, y, height, color);
    }

    /// Draw a filled rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, color: Color) {
        for i in 0..i32::from(width) {
            self.draw_vline(x + i, y, height, color);
        }
    }

    /// Draw one character, returning the horizontal advance in pixels
    ///
    /// Renders the glyph's columns plus one trailing blank column as the
    /// inter-character gap; the returned advance is `(width + 1) * scale`.
    /// Background pixels inside the cell follow [`Paint::resolve`]: left
    /// alone when `transparent`, painted with the inverse color otherwise.
    /// With `scale > 1` every glyph pixel becomes a `scale x scale` block.
    ///
    /// Characters placed past the right or bottom edge, or entirely above
    /// or left of the surface, are skipped with an advance of 0.
    pub fn draw_char(
        &mut self,
        x: i32,
        y: i32,
        code: u8,
        color: Color,
        transparent: bool,
        scale: u8,
    ) -> u16 {
        let scale = i32::from(scale.max(1));
        let width = i32::from(self.font.width_of(code));
        let dims = self.framebuffer.dimensions();

        if x >= i32::from(dims.width)
            || y >= i32::from(dims.height)
            || x + width * scale - 1 < 0
            || y + i32::from(GLYPH_HEIGHT) * scale - 1 < 0
        {
            return 0;
        }

        for i in 0..=width {
            // The column past the glyph is the inter-character gap, always
            // rendered as background.
            let column = if i == width {
                0
            } else {
                self.font.column(code, i as u8)
            };

            // Bit 0 of a column byte is reserved; rows live in bits 1-7.
            for j in 1..i32::from(GLYPH_HEIGHT) {
                let lit = column & (1 << j) != 0;
                match Paint::resolve(lit, color, transparent) {
                    Paint::Solid(pixel) => {
                        if scale == 1 {
                            self.draw_pixel(x + i, y + j - 1, pixel);
                        } else {
                            self.fill_rect(
                                x + i * scale,
                                y + (j - 1) * scale,
                                scale as u16,
                                scale as u16,
                                pixel,
                            );
                        }
                    }
                    Paint::Skip => {}
                }
            }
        }

        ((width + 1) * scale) as u16
    }

    /// Width in pixels of one character at the current text scale
    ///
    /// Excludes the inter-character gap. Codes without a font entry have
    /// width 0.
    pub fn char_width(&self, code: u8) -> u16 {
        u16::from(self.font.width_of(code)) * u16::from(self.style.scale.max(1))
    }

    /// Width in pixels of a string at the current text scale
    ///
    /// Sums each character's width plus its inter-character gap; the empty
    /// string has width 0.
    pub fn string_width(&self, text: &str) -> u32 {
        let scale = u32::from(self.style.scale.max(1));
        text.bytes()
            .map(|code| u32::from(self.font.width_of(code)) * scale + scale)
            .sum()
    }

    /// Draw a packed monochrome bitmap with its top-left corner at `(x, y)`
    ///
    /// Bits are packed 8 per byte, row-major, least significant bit first,
    /// with rows padded to whole bytes. Set bits are drawn in `color`;
    /// clear bits follow the transparent/opaque background policy. A
    /// source slice shorter than the declared size draws nothing.
    pub fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u8],
        width: u16,
        height: u16,
        color: Color,
        transparent: bool,
    ) {
        let row_bytes = usize::from(width).div_ceil(8);
        if bitmap.len() < row_bytes * usize::from(height) {
            return;
        }

        for j in 0..i32::from(height) {
            let mut block = 0u8;

            for i in 0..i32::from(width) {
                let bit = (i % 8) as u8;

                // One source byte covers 8 columns; fetch on entry.
                if bit == 0 {
                    block = bitmap[j as usize * row_bytes + i as usize / 8];
                }

                match Paint::resolve(block & (1 << bit) != 0, color, transparent) {
                    Paint::Solid(pixel) => self.draw_pixel(x + i, y + j, pixel),
                    Paint::Skip => {}
                }
            }
        }
    }

    /// Current text cursor position
    pub fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Move the text cursor
    ///
    /// Requests outside the surface are ignored and leave the cursor
    /// where it was.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        if x >= self.framebuffer.dimensions().width || y >= self.framebuffer.dimensions().height {
            return;
        }
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Current text style
    pub fn text_style(&self) -> TextStyle {
        self.style
    }

    /// Replace the text style
    ///
    /// A scale of 0 is treated as 1.
    pub fn set_text_style(&mut self, style: TextStyle) {
        self.style = TextStyle {
            scale: style.scale.max(1),
            ..style
        };
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Set whether glyph backgrounds are left untouched
    pub fn set_text_transparent(&mut self, transparent: bool) {
        self.style.transparent = transparent;
    }

    /// Set the text magnification (0 is treated as 1)
    pub fn set_text_scale(&mut self, scale: u8) {
        self.style.scale = scale.max(1);
    }

    /// Feed one character to the text stream
    ///
    /// `\n` moves to the start of the next text line, `\r` is ignored,
    /// anything else is drawn at the cursor with the current style. When
    /// the cursor reaches the right edge it wraps to the next line before
    /// the following character.
    pub fn write_byte(&mut self, code: u8) {
        let line_height = u16::from(self.style.scale.max(1)) * 8;

        if code == b'\n' {
            self.cursor_y = self.cursor_y.saturating_add(line_height);
            self.cursor_x = 0;
        } else if code != b'\r' {
            let advance = self.draw_char(
                i32::from(self.cursor_x),
                i32::from(self.cursor_y),
                code,
                self.style.color,
                self.style.transparent,
                self.style.scale,
            );

            self.cursor_x = self.cursor_x.saturating_add(advance);

            if self.cursor_x >= self.framebuffer.dimensions().width {
                self.cursor_y = self.cursor_y.saturating_add(line_height);
                self.cursor_x = 0;
            }
        }
    }

    /// Zero the framebuffer, mark the whole surface dirty, and home the
    /// cursor
    pub fn clear(&mut self) {
        self.framebuffer.clear();
        self.cursor_x = 0;
        self.cursor_y = 0;
        log::trace!("canvas cleared");
    }

    /// Push the dirty window through a transport
    ///
    /// Does nothing when no pixel was written since the last flush. The
    /// window is reset only after the transport reports success, so a
    /// failed flush can simply be retried.
    pub fn flush<T: Transport>(&mut self, transport: &mut T) -> Result<(), T::Error> {
        let window = self.framebuffer.window();
        if window.is_empty() {
            return Ok(());
        }

        log::trace!(
            "flushing window ({},{})..({},{})",
            window.x0,
            window.y0,
            window.x1,
            window.y1
        );

        transport.write_window(self.framebuffer.bytes(), window, self.framebuffer.dimensions())?;
        self.framebuffer.reset_window(false);
        Ok(())
    }

    /// Blank the surface and push it out
    ///
    /// The deterministic power-up sequence: clear, then flush the whole
    /// surface, leaving an empty dirty window behind.
    pub fn begin<T: Transport>(&mut self, transport: &mut T) -> Result<(), T::Error> {
        self.clear();
        self.flush(transport)
    }
}

/// Drive the canvas as a generic text sink
///
/// Every byte of the string goes through [`Canvas::write_byte`], so
/// `write!` formatting gets line wrap and newline handling for free.
impl<B> fmt::Write for Canvas<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::framebuffer::Window;
    use alloc::vec::Vec;
    use core::fmt::Write as _;

    struct MockTransport {
        frames: Vec<(Vec<u8>, Window, Dimensions)>,
    }

    impl MockTransport {
        fn new() -> Self {
            Self { frames: Vec::new() }
        }
    }

    impl Transport for MockTransport {
        type Error = core::convert::Infallible;

        fn write_window(
            &mut self,
            frame: &[u8],
            window: Window,
            dimensions: Dimensions,
        ) -> Result<(), Self::Error> {
            self.frames.push((frame.to_vec(), window, dimensions));
            Ok(())
        }
    }

    struct BrokenTransport;

    impl Transport for BrokenTransport {
        type Error = &'static str;

        fn write_window(
            &mut self,
            _frame: &[u8],
            _window: Window,
            _dimensions: Dimensions,
        ) -> Result<(), Self::Error> {
            Err("bus not responding")
        }
    }

    fn test_canvas(width: u16, height: u16) -> Canvas<Vec<u8>> {
        let dims = Dimensions::new(width, height).unwrap();
        let config = Builder::new().dimensions(dims).build().unwrap();
        let buffer = alloc::vec![0u8; dims.buffer_size()];
        let mut canvas = Canvas::new(config, buffer);
        canvas.framebuffer_mut().reset_window(false);
        canvas
    }

    fn lit_pixels(canvas: &Canvas<Vec<u8>>) -> Vec<(i32, i32)> {
        let dims = canvas.dimensions();
        let mut lit = Vec::new();
        for y in 0..i32::from(dims.height) {
            for x in 0..i32::from(dims.width) {
                if canvas.framebuffer().get(x, y) == Some(Color::On) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_shallow_line_reference_pixels() {
        let mut canvas = test_canvas(8, 8);
        canvas.draw_line(0, 0, 4, 2, Color::On);
        assert_eq!(lit_pixels(&canvas), [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_steep_line_reference_pixels() {
        let mut canvas = test_canvas(8, 8);
        canvas.draw_line(0, 0, 2, 4, Color::On);
        assert_eq!(lit_pixels(&canvas), [(0, 0), (0, 1), (1, 2), (1, 3), (2, 4)]);
    }

    #[test]
    fn test_horizontal_line_reference_pixels() {
        let mut canvas = test_canvas(8, 8);
        canvas.draw_line(1, 2, 5, 2, Color::On);
        assert_eq!(lit_pixels(&canvas), [(1, 2), (2, 2), (3, 2), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_vertical_line_reference_pixels() {
        let mut canvas = test_canvas(8, 8);
        canvas.draw_line(2, 1, 2, 5, Color::On);
        assert_eq!(lit_pixels(&canvas), [(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn test_diagonal_line_reference_pixels() {
        let mut canvas = test_canvas(8, 8);
        canvas.draw_line(0, 0, 4, 4, Color::On);
        assert_eq!(lit_pixels(&canvas), [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_line_is_endpoint_order_independent() {
        let mut forward = test_canvas(8, 8);
        forward.draw_line(0, 0, 4, 2, Color::On);

        let mut backward = test_canvas(8, 8);
        backward.draw_line(4, 2, 0, 0, Color::On);

        assert_eq!(lit_pixels(&forward), lit_pixels(&backward));
    }

    #[test]
    fn test_line_clips_off_surface_segment() {
        let mut canvas = test_canvas(8, 8);
        canvas.draw_line(4, 4, 12, 4, Color::On);
        assert_eq!(lit_pixels(&canvas), [(4, 4), (5, 4), (6, 4), (7, 4)]);
    }

    #[test]
    fn test_rect_draws_border_only() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_rect(2, 2, 5, 5, Color::On);

        for (x, y) in lit_pixels(&canvas) {
            let on_border = (x == 2 || x == 6 || y == 2 || y == 6)
                && (2..=6).contains(&x)
                && (2..=6).contains(&y);
            assert!(on_border, "unexpected pixel at ({x}, {y})");
        }
        assert_eq!(lit_pixels(&canvas).len(), 16);
    }

    #[test]
    fn test_zero_sized_rect_draws_nothing() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_rect(2, 2, 0, 5, Color::On);
        canvas.draw_rect(2, 2, 5, 0, Color::On);
        canvas.fill_rect(2, 2, 0, 5, Color::On);
        assert!(lit_pixels(&canvas).is_empty());
    }

    #[test]
    fn test_fill_rect_is_idempotent() {
        let mut canvas = test_canvas(16, 16);
        canvas.fill_rect(3, 4, 6, 5, Color::On);
        let first = canvas.framebuffer().bytes().to_vec();

        canvas.fill_rect(3, 4, 6, 5, Color::On);
        assert_eq!(canvas.framebuffer().bytes(), &first[..]);
    }

    #[test]
    fn test_fill_rect_covers_exact_area() {
        let mut canvas = test_canvas(16, 16);
        canvas.fill_rect(3, 4, 2, 3, Color::On);
        assert_eq!(
            lit_pixels(&canvas),
            [(3, 4), (4, 4), (3, 5), (4, 5), (3, 6), (4, 6)]
        );
    }

    #[test]
    fn test_char_advance_is_width_plus_gap_times_scale() {
        let mut canvas = test_canvas(84, 48);
        assert_eq!(canvas.draw_char(0, 0, b'A', Color::On, true, 1), 6);
        assert_eq!(canvas.draw_char(0, 16, b'A', Color::On, true, 2), 12);
        assert_eq!(canvas.draw_char(0, 32, b' ', Color::On, true, 1), 3);
    }

    #[test]
    fn test_unknown_code_advances_one_gap_column() {
        let mut canvas = test_canvas(84, 48);
        assert_eq!(canvas.draw_char(10, 0, 200, Color::On, true, 1), 1);
        assert!(lit_pixels(&canvas).is_empty());
    }

    #[test]
    fn test_off_surface_char_is_skipped() {
        let mut canvas = test_canvas(16, 16);
        assert_eq!(canvas.draw_char(16, 0, b'A', Color::On, true, 1), 0);
        assert_eq!(canvas.draw_char(0, 16, b'A', Color::On, true, 1), 0);
        assert_eq!(canvas.draw_char(-20, 0, b'A', Color::On, true, 1), 0);
        assert_eq!(canvas.draw_char(0, -20, b'A', Color::On, true, 1), 0);
        assert!(lit_pixels(&canvas).is_empty());
        assert!(canvas.framebuffer().window().is_empty());
    }

    #[test]
    fn test_transparent_glyph_preserves_background() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_pixel(0, 0, Color::On);

        // Space has no foreground pixels; transparent mode must not touch
        // anything.
        canvas.draw_char(0, 0, b' ', Color::On, true, 1);
        assert_eq!(canvas.framebuffer().get(0, 0), Some(Color::On));
    }

    #[test]
    fn test_opaque_glyph_paints_background_inverse() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_pixel(0, 0, Color::On);

        canvas.draw_char(0, 0, b' ', Color::On, false, 1);
        assert_eq!(canvas.framebuffer().get(0, 0), Some(Color::Off));
    }

    #[test]
    fn test_scaled_glyph_draws_blocks() {
        let mut canvas = test_canvas(16, 16);
        // '|' is a full-height bar in column 2.
        canvas.draw_char(0, 0, b'|', Color::On, true, 2);

        for (x, y) in [(4, 0), (5, 0), (4, 1), (5, 1), (4, 12), (5, 13)] {
            assert_eq!(canvas.framebuffer().get(x, y), Some(Color::On));
        }
        assert_eq!(canvas.framebuffer().get(3, 0), Some(Color::Off));
        assert_eq!(canvas.framebuffer().get(6, 0), Some(Color::Off));
    }

    #[test]
    fn test_char_width_scales() {
        let mut canvas = test_canvas(84, 48);
        assert_eq!(canvas.char_width(b'A'), 5);
        canvas.set_text_scale(3);
        assert_eq!(canvas.char_width(b'A'), 15);
        assert_eq!(canvas.char_width(200), 0);
    }

    #[test]
    fn test_string_width_sums_chars_and_gaps() {
        let mut canvas = test_canvas(84, 48);
        let expected = u32::from(canvas.char_width(b'A')) + 1 + u32::from(canvas.char_width(b'B')) + 1;
        assert_eq!(canvas.string_width("AB"), expected);
        assert_eq!(canvas.string_width(""), 0);

        canvas.set_text_scale(2);
        assert_eq!(canvas.string_width("AB"), 2 * expected);
    }

    #[test]
    fn test_bitmap_lsb_first_rows() {
        let mut canvas = test_canvas(16, 16);
        // Row 0: bit 0 -> column 0. Row 1: bit 7 -> column 7.
        canvas.draw_bitmap(0, 0, &[0b0000_0001, 0b1000_0000], 8, 2, Color::On, true);
        assert_eq!(lit_pixels(&canvas), [(0, 0), (7, 1)]);
    }

    #[test]
    fn test_bitmap_opaque_paints_background() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_pixel(1, 0, Color::On);

        canvas.draw_bitmap(0, 0, &[0b0000_0001], 8, 1, Color::On, false);
        assert_eq!(canvas.framebuffer().get(0, 0), Some(Color::On));
        assert_eq!(canvas.framebuffer().get(1, 0), Some(Color::Off));
    }

    #[test]
    fn test_bitmap_with_short_slice_draws_nothing() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_bitmap(0, 0, &[0xFF], 8, 2, Color::On, true);
        assert!(lit_pixels(&canvas).is_empty());
    }

    #[test]
    fn test_bitmap_rows_are_byte_padded() {
        let mut canvas = test_canvas(16, 16);
        // 10 columns -> 2 bytes per row; second byte holds columns 8-9.
        canvas.draw_bitmap(0, 0, &[0x00, 0b0000_0010, 0x00, 0x00], 10, 2, Color::On, true);
        assert_eq!(lit_pixels(&canvas), [(9, 0)]);
    }

    #[test]
    fn test_cursor_set_and_ignore_out_of_range() {
        let mut canvas = test_canvas(84, 48);
        canvas.set_cursor(10, 20);
        assert_eq!(canvas.cursor(), (10, 20));

        canvas.set_cursor(84, 0);
        assert_eq!(canvas.cursor(), (10, 20));
        canvas.set_cursor(0, 48);
        assert_eq!(canvas.cursor(), (10, 20));
    }

    #[test]
    fn test_newline_and_carriage_return() {
        let mut canvas = test_canvas(84, 48);
        canvas.set_cursor(10, 0);

        canvas.write_byte(b'\r');
        assert_eq!(canvas.cursor(), (10, 0));
        assert!(canvas.framebuffer().window().is_empty());

        canvas.write_byte(b'\n');
        assert_eq!(canvas.cursor(), (0, 8));

        canvas.set_text_scale(2);
        canvas.write_byte(b'\n');
        assert_eq!(canvas.cursor(), (0, 24));
    }

    #[test]
    fn test_write_advances_cursor() {
        let mut canvas = test_canvas(84, 48);
        canvas.write_byte(b'A');
        assert_eq!(canvas.cursor(), (6, 0));
    }

    #[test]
    fn test_text_wraps_at_right_edge() {
        let mut canvas = test_canvas(16, 48);
        canvas.write_byte(b'A');
        canvas.write_byte(b'A');
        assert_eq!(canvas.cursor(), (12, 0));

        // Third glyph pushes the cursor past the edge and wraps.
        canvas.write_byte(b'A');
        assert_eq!(canvas.cursor(), (0, 8));
    }

    #[test]
    fn test_fmt_write_renders_text() {
        let mut canvas = test_canvas(84, 48);
        write!(canvas, "A{}", 7).unwrap();
        assert_eq!(canvas.cursor(), (12, 0));
        assert!(!canvas.framebuffer().window().is_empty());
    }

    #[test]
    fn test_clear_homes_cursor() {
        let mut canvas = test_canvas(84, 48);
        canvas.set_cursor(10, 20);
        canvas.clear();
        assert_eq!(canvas.cursor(), (0, 0));
        assert_eq!(
            canvas.framebuffer().window(),
            Window::full(canvas.dimensions())
        );
    }

    #[test]
    fn test_flush_skips_when_nothing_dirty() {
        let mut canvas = test_canvas(16, 16);
        let mut transport = MockTransport::new();

        canvas.flush(&mut transport).unwrap();
        assert!(transport.frames.is_empty());
    }

    #[test]
    fn test_flush_failure_keeps_window_for_retry() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_pixel(5, 5, Color::On);

        assert!(canvas.flush(&mut BrokenTransport).is_err());
        assert!(!canvas.framebuffer().window().is_empty());

        let mut transport = MockTransport::new();
        canvas.flush(&mut transport).unwrap();
        assert_eq!(transport.frames.len(), 1);
        assert!(canvas.framebuffer().window().is_empty());
    }

    #[test]
    fn test_begin_pushes_blank_full_frame() {
        let mut canvas = test_canvas(16, 16);
        canvas.draw_pixel(3, 3, Color::On);

        let mut transport = MockTransport::new();
        canvas.begin(&mut transport).unwrap();

        let (frame, window, dims) = &transport.frames[0];
        assert!(frame.iter().all(|byte| *byte == 0));
        assert_eq!(*window, Window::full(canvas.dimensions()));
        assert_eq!(*dims, canvas.dimensions());
        assert!(canvas.framebuffer().window().is_empty());
    }

    #[test]
    fn test_end_to_end_rect_flush_scenario() {
        let mut canvas = test_canvas(16, 16);
        let mut transport = MockTransport::new();

        canvas.begin(&mut transport).unwrap();
        canvas.draw_rect(2, 2, 5, 5, Color::On);
        canvas.flush(&mut transport).unwrap();

        assert_eq!(transport.frames.len(), 2);
        let (frame, window, dims) = &transport.frames[1];
        assert_eq!(
            *window,
            Window {
                x0: 2,
                y0: 2,
                x1: 7,
                y1: 7
            }
        );

        // Only the border pixels are set in the flushed frame.
        for y in 0..16i32 {
            for x in 0..16i32 {
                let index = dims.page_span((y / 8) as u16, x as u16, x as u16 + 1).start;
                let lit = frame[index] & (1 << (y % 8)) != 0;
                let on_border = (x == 2 || x == 6 || y == 2 || y == 6)
                    && (2..=6).contains(&x)
                    && (2..=6).contains(&y);
                assert_eq!(lit, on_border, "mismatch at ({x}, {y})");
            }
        }

        // Nothing left to push.
        canvas.flush(&mut transport).unwrap();
        assert_eq!(transport.frames.len(), 2);
    }
}

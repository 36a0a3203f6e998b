//! Surface configuration types and builder

use crate::font::{FONT_5X7, Font};

pub use crate::error::BuilderError;

/// Surface dimensions in pixels
///
/// Fixed at construction time. Vertically the surface is organised in
/// pages of 8 stacked rows, one byte per column per page; a height that is
/// not a multiple of 8 leaves the last page partially used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages covering the height
    pub fn pages(&self) -> u16 {
        self.height.div_ceil(8)
    }

    /// Required backing buffer size in bytes
    ///
    /// One byte per column per page: `width * ceil(height / 8)`.
    pub fn buffer_size(&self) -> usize {
        usize::from(self.width) * usize::from(self.pages())
    }

    /// Byte range of columns `x0..x1` within one page row
    ///
    /// Transports use this to slice the backing buffer when streaming a
    /// dirty window page by page.
    pub fn page_span(&self, page: u16, x0: u16, x1: u16) -> core::ops::Range<usize> {
        let base = usize::from(page) * usize::from(self.width);
        base + usize::from(x0)..base + usize::from(x1)
    }
}

/// Renderer configuration
///
/// Use [`Builder`] to create a `Config`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Surface dimensions
    pub dimensions: Dimensions,
    /// Font used for text rendering
    pub font: Font<'static>,
}

/// Builder for constructing renderer configuration
///
/// # Example
///
/// ```rust
/// use monogfx::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(84, 48) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Surface dimensions (required)
    dimensions: Option<Dimensions>,
    /// Font used for text rendering
    font: Font<'static>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            font: FONT_5X7,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set surface dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the text font
    ///
    /// Defaults to the bundled [`FONT_5X7`].
    pub fn font(mut self, font: Font<'static>) -> Self {
        self.font = font;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set.
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            font: self.font,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(matches!(
            Dimensions::new(0, 48),
            Err(BuilderError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_zero_height_is_rejected() {
        assert!(matches!(
            Dimensions::new(84, 0),
            Err(BuilderError::InvalidDimensions { height: 0, .. })
        ));
    }

    #[test]
    fn test_buffer_size_is_one_byte_per_column_per_page() {
        let dims = Dimensions::new(84, 48).unwrap();
        assert_eq!(dims.pages(), 6);
        assert_eq!(dims.buffer_size(), 84 * 6);

        let dims = Dimensions::new(128, 64).unwrap();
        assert_eq!(dims.buffer_size(), 128 * 64 / 8);
    }

    #[test]
    fn test_partial_last_page_rounds_up() {
        let dims = Dimensions::new(10, 12).unwrap();
        assert_eq!(dims.pages(), 2);
        assert_eq!(dims.buffer_size(), 20);
    }

    #[test]
    fn test_page_span_addresses_page_major_layout() {
        let dims = Dimensions::new(84, 48).unwrap();
        assert_eq!(dims.page_span(0, 0, 84), 0..84);
        assert_eq!(dims.page_span(2, 10, 20), 2 * 84 + 10..2 * 84 + 20);
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_with_dimensions_succeeds() {
        let dims = Dimensions::new(84, 48).unwrap();
        let config = Builder::new().dimensions(dims).build().unwrap();
        assert_eq!(config.dimensions, dims);
    }
}

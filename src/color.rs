//! Color types for monochrome displays
//!
//! Pixels on the supported panels are strictly two-valued: a bit in the
//! framebuffer is either lit ([`Color::On`]) or dark ([`Color::Off`]).
//!
//! Text and bitmap rendering additionally need a third outcome for
//! background pixels drawn in transparent mode: "leave the framebuffer
//! alone". That outcome is modelled explicitly by [`Paint`] instead of an
//! out-of-range color value.
//!
//! ## Example
//!
//! ```
//! use monogfx::{Color, Paint};
//!
//! assert_eq!(Color::On.invert(), Color::Off);
//!
//! // Foreground bits always resolve to the requested color.
//! assert_eq!(Paint::resolve(true, Color::On, true), Paint::Solid(Color::On));
//!
//! // Background bits are skipped in transparent mode ...
//! assert_eq!(Paint::resolve(false, Color::On, true), Paint::Skip);
//!
//! // ... and painted with the inverse color otherwise.
//! assert_eq!(Paint::resolve(false, Color::On, false), Paint::Solid(Color::Off));
//! ```

/// State of a single pixel
///
/// On panels that light pixels against a dark background `On` is the lit
/// state; on reflective LCDs it is the dark one. The core only cares that
/// there are exactly two.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Bit cleared
    #[default]
    Off,
    /// Bit set
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Off,
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::On,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Off => Self::Off,
            Color::On => Self::On,
        }
    }
}

impl From<bool> for Color {
    fn from(lit: bool) -> Self {
        if lit { Self::On } else { Self::Off }
    }
}

impl Color {
    /// Whether the framebuffer bit is set for this color
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// The other color
    pub fn invert(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

/// Outcome of resolving one glyph or bitmap pixel
///
/// Rendering a foreground/background bit against a [`crate::TextStyle`]
/// yields either a concrete color to write or the decision not to touch
/// the framebuffer at all.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Paint {
    /// Write this color
    Solid(Color),
    /// Leave the pixel untouched
    Skip,
}

impl Paint {
    /// Resolve a source bit to a paint decision
    ///
    /// Foreground bits (`foreground == true`) take the requested color.
    /// Background bits are skipped when `transparent`, otherwise they are
    /// painted with the inverse of the requested color.
    pub fn resolve(foreground: bool, color: Color, transparent: bool) -> Self {
        if foreground {
            Self::Solid(color)
        } else if transparent {
            Self::Skip
        } else {
            Self::Solid(color.invert())
        }
    }
}

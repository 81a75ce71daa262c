// ABOUTME: Foreground/background color attribute for a terminal cell.
// ABOUTME: Stores default, palette index or RGB and resolves against a palette at render time.

use serde::{Deserialize, Serialize};

use crate::Rgb24;

/// Number of "dark" legacy colors (indices 0-7) that have a bright counterpart.
pub const DARK_COLOR_COUNT: usize = 8;

/// Size of the legacy 16-color table (8 dark + 8 bright).
pub const LEGACY_COLOR_COUNT: usize = 16;

/// A color as stored on text, not yet turned into a pixel value.
///
/// Only the tag and its payload are kept. The palette and default color are
/// handed in at [`TextColor::resolve`] time, so the same attribute renders
/// correctly after a theme or palette change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextColor {
    /// Whatever the terminal currently considers the default color.
    #[default]
    Default,
    /// Index into the color table (0-15 ANSI, 16-255 extended).
    Indexed(u8),
    /// Explicit 24-bit color.
    Rgb(Rgb24),
}

impl TextColor {
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    pub const fn rgb(color: Rgb24) -> Self {
        Self::Rgb(color)
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    pub fn is_rgb(&self) -> bool {
        matches!(self, Self::Rgb(_))
    }

    /// True if this is an index into the color table.
    pub fn is_legacy(&self) -> bool {
        !(self.is_default() || self.is_rgb())
    }

    pub fn set_rgb(&mut self, color: Rgb24) {
        *self = Self::Rgb(color);
    }

    pub fn set_indexed(&mut self, index: u8) {
        *self = Self::Indexed(index);
    }

    pub fn set_default(&mut self) {
        *self = Self::Default;
    }

    /// Palette index, if this is a legacy color.
    pub fn index(&self) -> Option<u8> {
        match *self {
            Self::Indexed(index) => Some(index),
            _ => None,
        }
    }

    /// Stored channels, if this is an RGB color.
    pub fn rgb_value(&self) -> Option<Rgb24> {
        match *self {
            Self::Rgb(color) => Some(color),
            _ => None,
        }
    }

    /// Turn this attribute into a concrete color.
    ///
    /// - `Default` yields `default_color`.
    /// - `Rgb` yields the stored channels and ignores everything else.
    /// - `Indexed` looks the index up in `palette`. With `brighten` set, a dark
    ///   index (0-7) is swapped for its bright counterpart at `index + 8`;
    ///   indices 8 and up are already bright (or extended) and are used as-is.
    ///   This is how "bold is bright" is rendered.
    ///
    /// # Panics
    ///
    /// An index outside `palette`, or brightening with a palette shorter than
    /// 16 entries, means the caller's palette does not match the text it is
    /// rendering. That is a bug, not an input error, so it panics in every
    /// build profile instead of reading a neighbouring entry.
    #[track_caller]
    pub fn resolve(&self, palette: &[Rgb24], default_color: Rgb24, brighten: bool) -> Rgb24 {
        match *self {
            Self::Default => default_color,
            Self::Rgb(color) => color,
            Self::Indexed(index) => {
                let index = usize::from(index);
                if index >= palette.len() {
                    palette_too_small(index, palette.len());
                }
                if brighten && index < DARK_COLOR_COUNT {
                    if palette.len() < LEGACY_COLOR_COUNT {
                        palette_too_small(index + DARK_COLOR_COUNT, palette.len());
                    }
                    palette[index + DARK_COLOR_COUNT]
                } else {
                    palette[index]
                }
            }
        }
    }
}

#[cold]
#[track_caller]
fn palette_too_small(index: usize, palette_len: usize) -> ! {
    tracing::error!(index, palette_len, "Color index outside palette");
    panic!("color index {index} out of range for a palette of {palette_len} entries");
}

impl From<u8> for TextColor {
    fn from(index: u8) -> Self {
        Self::Indexed(index)
    }
}

impl From<Rgb24> for TextColor {
    fn from(color: Rgb24) -> Self {
        Self::Rgb(color)
    }
}

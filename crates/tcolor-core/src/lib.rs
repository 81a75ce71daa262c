// ABOUTME: Text color attributes for a terminal and the palettes they resolve against.
// ABOUTME: Defines RGB values, color tags, color schemes and config file handling.

pub mod attribute;
pub mod config;
pub mod rgb;
pub mod scheme;
pub mod text_color;

pub use attribute::TextAttribute;
pub use config::{Config, ConfigError};
pub use rgb::{ParseColorError, Rgb24};
pub use scheme::{ColorScheme, ColorTable};
pub use text_color::{TextColor, DARK_COLOR_COUNT, LEGACY_COLOR_COUNT};

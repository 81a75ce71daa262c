// ABOUTME: Color schemes (16 ANSI colors plus default fg/bg) and the 256-entry table built from them.
// ABOUTME: The table is what TextColor resolves against at render time.

use serde::{Deserialize, Serialize};

use crate::{Rgb24, TextColor, LEGACY_COLOR_COUNT};

/// Number of entries in a fully expanded color table.
pub const TABLE_SIZE: usize = 256;

const fn rgb(r: u8, g: u8, b: u8) -> Rgb24 {
    Rgb24::new(r, g, b)
}

/// A 16-color terminal palette plus foreground/background
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Rgb24,
    pub background: Rgb24,
    /// ANSI colors 0-15 (8 normal + 8 bright)
    pub colors: [Rgb24; LEGACY_COLOR_COUNT],
}

impl ColorScheme {
    /// Amber monochrome phosphor (#ff8100)
    pub fn amber() -> Self {
        let bg = rgb(13, 5, 0);
        let dark = rgb(102, 51, 0);
        let medium = rgb(179, 89, 0);
        let bright = rgb(0xff, 0x81, 0x00);
        let full = rgb(255, 179, 51);

        Self {
            name: "Amber".to_string(),
            foreground: bright,
            background: bg,
            colors: [
                // Normal colors (0-7): varying intensities
                bg,      // 0: black
                dark,    // 1: red
                medium,  // 2: green
                medium,  // 3: yellow
                dark,    // 4: blue
                dark,    // 5: magenta
                medium,  // 6: cyan
                bright,  // 7: white
                // Bright colors (8-15)
                dark,    // 8: bright black (gray)
                medium,  // 9: bright red
                bright,  // 10: bright green
                bright,  // 11: bright yellow
                medium,  // 12: bright blue
                medium,  // 13: bright magenta
                bright,  // 14: bright cyan
                full,    // 15: bright white
            ],
        }
    }

    /// Green phosphor (#22a75f)
    pub fn green() -> Self {
        let bg = rgb(0, 5, 3);
        let dark = rgb(13, 66, 38);
        let medium = rgb(23, 117, 66);
        let bright = rgb(0x22, 0xa7, 0x5f);
        let full = rgb(51, 217, 128);

        Self {
            name: "Green".to_string(),
            foreground: bright,
            background: bg,
            colors: [
                bg, dark, medium, medium, dark, dark, medium, bright,
                dark, medium, bright, bright, medium, medium, bright, full,
            ],
        }
    }

    /// White/gray monochrome
    pub fn white() -> Self {
        let bg = Rgb24::BLACK;
        let dark = rgb(77, 77, 77);
        let medium = rgb(153, 153, 153);
        let bright = Rgb24::WHITE;

        Self {
            name: "White".to_string(),
            foreground: bright,
            background: bg,
            colors: [
                bg, dark, medium, medium, dark, dark, medium, bright,
                dark, medium, bright, bright, medium, medium, bright, bright,
            ],
        }
    }

    /// Full color scheme with actual ANSI colors
    pub fn ansi() -> Self {
        Self {
            name: "ANSI".to_string(),
            foreground: rgb(217, 217, 217),
            background: rgb(26, 26, 26),
            colors: [
                rgb(0, 0, 0),       // 0: black
                rgb(204, 51, 51),   // 1: red
                rgb(51, 204, 51),   // 2: green
                rgb(204, 204, 51),  // 3: yellow
                rgb(51, 51, 204),   // 4: blue
                rgb(204, 51, 204),  // 5: magenta
                rgb(51, 204, 204),  // 6: cyan
                rgb(191, 191, 191), // 7: white
                rgb(102, 102, 102), // 8: bright black
                rgb(255, 102, 102), // 9: bright red
                rgb(102, 255, 102), // 10: bright green
                rgb(255, 255, 102), // 11: bright yellow
                rgb(102, 102, 255), // 12: bright blue
                rgb(255, 102, 255), // 13: bright magenta
                rgb(102, 255, 255), // 14: bright cyan
                rgb(255, 255, 255), // 15: bright white
            ],
        }
    }

    pub fn presets() -> Vec<ColorScheme> {
        vec![Self::amber(), Self::green(), Self::white(), Self::ansi()]
    }

    /// Look up a preset by name, ignoring case.
    pub fn preset(name: &str) -> Option<ColorScheme> {
        Self::presets()
            .into_iter()
            .find(|scheme| scheme.name.eq_ignore_ascii_case(name))
    }

    /// Convert a 256-color palette index to RGB
    /// - 0-15: use the scheme's ANSI colors
    /// - 16-231: 6x6x6 color cube
    /// - 232-255: grayscale ramp
    pub fn indexed_color(&self, index: u8) -> Rgb24 {
        match index {
            0..=15 => self.colors[index as usize],
            16..=231 => {
                let idx = index - 16;
                // 0->0, 1->95, 2->135, 3->175, 4->215, 5->255
                let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
                rgb(level(idx / 36), level((idx / 6) % 6), level(idx % 6))
            }
            232..=255 => {
                // 232 -> 8, 255 -> 238
                let gray = 8 + (index - 232) * 10;
                rgb(gray, gray, gray)
            }
        }
    }

    /// Expand this scheme into the full table that text colors resolve against.
    pub fn table(&self, bold_is_bright: bool) -> ColorTable {
        let palette = (0..=u8::MAX).map(|i| self.indexed_color(i)).collect();
        tracing::debug!(scheme = %self.name, bold_is_bright, "Built color table");
        ColorTable {
            palette,
            foreground: self.foreground,
            background: self.background,
            bold_is_bright,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::amber()
    }
}

/// A resolved 256-entry palette plus the current default colors.
///
/// Rebuild it whenever the scheme changes; stored [`TextColor`]s pick up the
/// new values on their next resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    palette: Vec<Rgb24>,
    foreground: Rgb24,
    background: Rgb24,
    bold_is_bright: bool,
}

impl ColorTable {
    pub fn palette(&self) -> &[Rgb24] {
        &self.palette
    }

    pub fn foreground(&self) -> Rgb24 {
        self.foreground
    }

    pub fn background(&self) -> Rgb24 {
        self.background
    }

    /// Whether bold text should use the bright half of the 16-color table.
    pub fn bold_is_bright(&self) -> bool {
        self.bold_is_bright
    }

    #[track_caller]
    pub fn resolve(&self, color: &TextColor, default_color: Rgb24, brighten: bool) -> Rgb24 {
        color.resolve(&self.palette, default_color, brighten)
    }
}

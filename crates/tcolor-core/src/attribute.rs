// ABOUTME: Per-cell text attribute: foreground, background and bold.
// ABOUTME: Applies the table's bold-is-bright policy when resolving the foreground.

use serde::{Deserialize, Serialize};

use crate::{ColorTable, Rgb24, TextColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextAttribute {
    pub foreground: TextColor,
    pub background: TextColor,
    pub bold: bool,
}

impl TextAttribute {
    pub const fn new(foreground: TextColor, background: TextColor) -> Self {
        Self {
            foreground,
            background,
            bold: false,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Bold text is brightened only when the table says bold means bright.
    pub fn resolve_foreground(&self, table: &ColorTable) -> Rgb24 {
        let brighten = self.bold && table.bold_is_bright();
        table.resolve(&self.foreground, table.foreground(), brighten)
    }

    pub fn resolve_background(&self, table: &ColorTable) -> Rgb24 {
        table.resolve(&self.background, table.background(), false)
    }
}

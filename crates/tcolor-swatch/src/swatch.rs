// ABOUTME: Formats a color table as rows of 24-bit ANSI color blocks.
// ABOUTME: Every cell goes through TextColor resolution, the same path a renderer uses.

use std::fmt::Write;

use tcolor_core::{ColorTable, Rgb24, TextAttribute, TextColor};

const RESET: &str = "\x1b[0m";

/// A few explicit colors to show that RGB bypasses the table.
const RGB_SAMPLES: [Rgb24; 4] = [
    Rgb24::new(0xff, 0x81, 0x00),
    Rgb24::new(0x22, 0xa7, 0x5f),
    Rgb24::new(0x34, 0x65, 0xa4),
    Rgb24::new(0xef, 0x29, 0x29),
];

fn block(color: Rgb24) -> String {
    format!("\x1b[48;2;{};{};{}m    {RESET}", color.r, color.g, color.b)
}

fn text(fg: Rgb24, bg: Rgb24, label: &str) -> String {
    format!(
        "\x1b[38;2;{};{};{};48;2;{};{};{}m{label}{RESET}",
        fg.r, fg.g, fg.b, bg.r, bg.g, bg.b
    )
}

fn row(out: &mut String, label: &str, table: &ColorTable, indices: impl Iterator<Item = u8>, brighten: bool) {
    let _ = write!(out, "{label:<8}");
    for index in indices {
        out.push_str(&block(table.resolve(&TextColor::Indexed(index), table.foreground(), brighten)));
    }
    out.push('\n');
}

pub fn render(table: &ColorTable) -> String {
    let mut out = String::new();

    let plain = TextAttribute::default();
    let bold = plain.with_bold(true);
    let _ = writeln!(
        out,
        "{:<8}{} {}",
        "default",
        text(plain.resolve_foreground(table), plain.resolve_background(table), " Normal "),
        text(bold.resolve_foreground(table), bold.resolve_background(table), " Bold "),
    );

    row(&mut out, "normal", table, 0..8, false);
    row(&mut out, "bold", table, 0..8, table.bold_is_bright());
    row(&mut out, "bright", table, 8..16, false);

    for start in (16u8..232).step_by(36) {
        row(&mut out, if start == 16 { "cube" } else { "" }, table, start..start + 36, false);
    }
    row(&mut out, "gray", table, 232..=255, false);

    let _ = write!(out, "{:<8}", "rgb");
    for color in RGB_SAMPLES {
        out.push_str(&block(table.resolve(&TextColor::Rgb(color), table.foreground(), true)));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcolor_core::ColorScheme;

    #[test]
    fn test_bold_row_uses_bright_half() {
        let scheme = ColorScheme::ansi();
        let out = render(&scheme.table(true));
        let bold_line = out.lines().find(|l| l.starts_with("bold")).unwrap();

        assert!(bold_line.contains(&block(scheme.colors[9])));
        assert!(!bold_line.contains(&block(scheme.colors[1])));
    }

    #[test]
    fn test_bold_row_without_bold_is_bright() {
        let scheme = ColorScheme::ansi();
        let out = render(&scheme.table(false));
        let bold_line = out.lines().find(|l| l.starts_with("bold")).unwrap();

        assert!(bold_line.contains(&block(scheme.colors[1])));
    }

    #[test]
    fn test_layout() {
        let out = render(&ColorScheme::amber().table(true));
        // default, normal, bold, bright, 6 cube rows, gray, rgb
        assert_eq!(out.lines().count(), 12);
        assert!(out.contains(&block(RGB_SAMPLES[0])));
        assert!(out.lines().next().unwrap().contains(" Normal "));
    }
}

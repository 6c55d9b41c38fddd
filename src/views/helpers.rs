//! Common styling helpers for the terminal views.

use crate::theme::{Rgb, Theme};

const RESET: &str = "\x1b[0m";

/// Color text with a truecolor foreground escape.
pub fn fg(color: Rgb, text: &str) -> String {
    format!(
        "\x1b[38;2;{};{};{}m{}{}",
        color[0], color[1], color[2], text, RESET
    )
}

/// Color text and render it in bold.
pub fn fg_bold(color: Rgb, text: &str) -> String {
    format!(
        "\x1b[1m\x1b[38;2;{};{};{}m{}{}",
        color[0], color[1], color[2], text, RESET
    )
}

/// Render a small tag on the theme's chip background.
pub fn chip(theme: Theme, label: &str) -> String {
    let bg = theme.chip_color();
    let text = theme.text_color();
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {} {}",
        bg[0], bg[1], bg[2], text[0], text[1], text[2], label, RESET
    )
}

/// Section heading in the theme's accent color.
pub fn heading(theme: Theme, text: &str) -> String {
    fg_bold(theme.accent_color(), text)
}

/// Horizontal rule separating page regions.
pub fn rule(theme: Theme, width: usize) -> String {
    fg(theme.secondary_text_color(), &"─".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fg_embeds_color_and_resets() {
        let styled = fg([1, 2, 3], "hi");
        assert!(styled.contains("38;2;1;2;3"));
        assert!(styled.contains("hi"));
        assert!(styled.ends_with(RESET));
    }

    #[test]
    fn test_chip_uses_theme_chip_background() {
        let styled = chip(Theme::Dark, "Rust");
        let bg = Theme::Dark.chip_color();
        assert!(styled.contains(&format!("48;2;{};{};{}", bg[0], bg[1], bg[2])));
        assert!(styled.contains("Rust"));
    }
}

//! Theme system for the portfolio page.
//!
//! Provides dark and light theme support with the page's color palette and
//! the string encoding used by the preference store.

use serde::{Deserialize, Serialize};

/// An sRGB color as used by the terminal renderer.
pub type Rgb = [u8; 3];

/// The light/dark visual mode, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light rendering on a pale background
    #[default]
    Light,
    /// Dark rendering on a near-black background
    Dark,
}

impl Theme {
    /// Get the display name for this theme.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The literal value stored in the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference value.
    ///
    /// Only the literal values `"light"` and `"dark"` are accepted; anything
    /// else returns `None` and is treated as an absent preference.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme (light becomes dark and vice versa).
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Get the page background color for this theme.
    pub fn background_color(&self) -> Rgb {
        match self {
            Theme::Dark => [17, 24, 39],
            Theme::Light => [238, 242, 255],
        }
    }

    /// Get the card/surface color for this theme.
    pub fn surface_color(&self) -> Rgb {
        match self {
            Theme::Dark => [31, 41, 55],
            Theme::Light => [255, 255, 255],
        }
    }

    /// Get the primary text color for this theme.
    pub fn text_color(&self) -> Rgb {
        match self {
            Theme::Dark => [255, 255, 255],
            Theme::Light => [17, 24, 39],
        }
    }

    /// Get the secondary text color (for less prominent text).
    pub fn secondary_text_color(&self) -> Rgb {
        match self {
            Theme::Dark => [209, 213, 219],
            Theme::Light => [75, 85, 99],
        }
    }

    /// Get the accent color for this theme.
    pub fn accent_color(&self) -> Rgb {
        match self {
            Theme::Dark => [129, 140, 248],
            Theme::Light => [99, 102, 241],
        }
    }

    /// Get the highlight color (same for both themes).
    pub fn highlight_color(&self) -> Rgb {
        [251, 113, 133]
    }

    /// Get the background color for tags and badges.
    pub fn chip_color(&self) -> Rgb {
        match self {
            Theme::Dark => [55, 65, 81],
            Theme::Light => [243, 244, 246],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse_accepts_only_stored_literals() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn test_serde_encoding_matches_stored_literals() {
        for theme in [Theme::Light, Theme::Dark] {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.as_str()));
        }
    }
}

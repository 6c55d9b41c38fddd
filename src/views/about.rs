//! About view - introduction and skills.

use std::fmt::Write;

use crate::model::Profile;
use crate::theme::Theme;
use crate::views::helpers::{chip, fg, heading};

/// Build the About section.
pub fn view_about(theme: Theme, profile: &Profile) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", heading(theme, "About Me"));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", fg(theme.secondary_text_color(), &profile.summary));

    for group in &profile.skills {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", fg(theme.text_color(), &group.name));
        let chips: Vec<String> = group.skills.iter().map(|s| chip(theme, s)).collect();
        let _ = writeln!(out, "{}", chips.join(" "));
    }

    out
}

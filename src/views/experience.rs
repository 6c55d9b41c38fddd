//! Experience view - timeline of work, education, and awards.

use std::fmt::Write;

use crate::model::ExperienceEntry;
use crate::theme::Theme;
use crate::views::helpers::{fg, fg_bold};

/// Build the Experience section.
pub fn view_experience(theme: Theme, entries: &[ExperienceEntry]) -> String {
    let mut out = String::new();

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(
            out,
            "{} {}",
            fg(entry.kind.accent(), entry.kind.glyph()),
            fg_bold(theme.text_color(), &entry.title)
        );
        let _ = writeln!(
            out,
            "  {}",
            fg(
                theme.secondary_text_color(),
                &format!("{} • {}", entry.organization, entry.period)
            )
        );
        let _ = writeln!(out, "  {}", fg(theme.text_color(), &entry.description));
    }

    out
}

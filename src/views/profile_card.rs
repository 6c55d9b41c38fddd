//! Profile card - headline, tagline, and social links.

use std::fmt::Write;

use crate::model::{Profile, SocialLink};
use crate::theme::Theme;
use crate::views::helpers::{fg, fg_bold};

/// Marker for a social link's icon identifier.
fn icon_marker(link: &SocialLink) -> String {
    format!("[{}]", link.icon)
}

/// Build the profile card shown beside every section.
pub fn view_profile_card(theme: Theme, profile: &Profile) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", fg_bold(theme.text_color(), &profile.headline));
    if !profile.tagline.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            fg(theme.secondary_text_color(), &profile.tagline)
        );
    }
    if !profile.avatar_url.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            fg(theme.secondary_text_color(), &profile.avatar_url)
        );
    }

    if !profile.social.is_empty() {
        let links: Vec<String> = profile
            .social
            .iter()
            .map(|link| {
                format!(
                    "{} {}",
                    fg(link.accent, &icon_marker(link)),
                    fg(theme.secondary_text_color(), &link.href)
                )
            })
            .collect();
        let _ = writeln!(out);
        for link in links {
            let _ = writeln!(out, "{}", link);
        }
    }

    out
}

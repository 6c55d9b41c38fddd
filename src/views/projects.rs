//! Projects view - project cards with tags and star counts.

use std::fmt::Write;

use crate::model::Project;
use crate::theme::Theme;
use crate::views::helpers::{chip, fg, fg_bold};

/// Build the Projects section.
pub fn view_projects(theme: Theme, projects: &[Project]) -> String {
    let mut out = String::new();

    for (i, project) in projects.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let stars = chip(theme, &format!("★ {}", project.stars));
        let _ = writeln!(
            out,
            "{}  {}",
            fg_bold(theme.text_color(), &project.title),
            stars
        );
        let _ = writeln!(
            out,
            "{}",
            fg(theme.secondary_text_color(), &project.description)
        );
        if !project.tech.is_empty() {
            let tags: Vec<String> = project.tech.iter().map(|t| chip(theme, t)).collect();
            let _ = writeln!(out, "{}", tags.join(" "));
        }
    }

    out
}

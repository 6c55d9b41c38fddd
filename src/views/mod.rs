//! View modules for the portfolio page.
//!
//! Each section has its own view function; `render_page` assembles the
//! header, the profile card, and the active section into the full page.
//! Views are pure: state and content in, styled text out.

mod about;
mod experience;
mod helpers;
mod profile_card;
mod projects;

pub use about::view_about;
pub use experience::view_experience;
pub use profile_card::view_profile_card;
pub use projects::view_projects;

use std::fmt::Write;

use crate::app::{PortfolioApp, Section};
use crate::content::PortfolioContent;
use crate::theme::Theme;
use helpers::{fg, fg_bold, heading, rule};

const PAGE_WIDTH: usize = 72;

/// Build the page header: name, section tabs, and the theme indicator.
fn view_header(theme: Theme, name: &str, active: Section) -> String {
    let mut out = String::new();

    let tabs: Vec<String> = Section::all()
        .iter()
        .map(|&section| {
            if section == active {
                fg_bold(theme.accent_color(), &format!("[{}]", section.name()))
            } else {
                fg(theme.secondary_text_color(), &format!(" {} ", section.name()))
            }
        })
        .collect();

    let indicator = match theme {
        Theme::Dark => "☾ dark",
        Theme::Light => "☀ light",
    };

    let _ = writeln!(out, "{}", heading(theme, name));
    let _ = writeln!(
        out,
        "{}   {}",
        tabs.join(" "),
        fg(theme.highlight_color(), indicator)
    );

    out
}

/// Render the full page for the current application state.
pub fn render_page(app: &PortfolioApp, content: &PortfolioContent) -> String {
    let theme = app.theme();
    let mut out = String::new();

    let _ = write!(out, "{}", view_header(theme, &content.profile.name, app.section()));
    let _ = writeln!(out, "{}", rule(theme, PAGE_WIDTH));
    let _ = write!(out, "{}", view_profile_card(theme, &content.profile));
    let _ = writeln!(out, "{}", rule(theme, PAGE_WIDTH));

    let section = match app.section() {
        Section::About => view_about(theme, &content.profile),
        Section::Projects => view_projects(theme, &content.projects),
        Section::Experience => view_experience(theme, &content.experience),
    };
    let _ = write!(out, "{}", section);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::prefs::{MemoryStore, ThemePreferences};

    fn test_app() -> PortfolioApp {
        PortfolioApp::new(ThemePreferences::new(Box::new(MemoryStore::new()), false))
    }

    #[test]
    fn test_page_shows_name_and_active_section() {
        let content = PortfolioContent::default();
        let mut app = test_app();

        let page = render_page(&app, &content);
        assert!(page.contains("Jane Cooper"));
        assert!(page.contains("About Me"));

        app.update(Message::SelectSection(Section::Projects));
        let page = render_page(&app, &content);
        assert!(page.contains("Quantum Computing Simulator"));
        assert!(page.contains("★ 256"));

        app.update(Message::SelectSection(Section::Experience));
        let page = render_page(&app, &content);
        assert!(page.contains("TechCorp"));
        assert!(page.contains("2022 - Present"));
    }

    #[test]
    fn test_page_uses_the_active_theme_palette() {
        let content = PortfolioContent::default();
        let mut app = test_app();

        let accent = Theme::Light.accent_color();
        let page = render_page(&app, &content);
        assert!(page.contains(&format!("38;2;{};{};{}", accent[0], accent[1], accent[2])));

        app.update(Message::ToggleTheme);
        let accent = Theme::Dark.accent_color();
        let page = render_page(&app, &content);
        assert!(page.contains(&format!("38;2;{};{};{}", accent[0], accent[1], accent[2])));
    }

    #[test]
    fn test_social_links_render_with_icon_markers() {
        let content = PortfolioContent::default();
        let app = test_app();

        let page = render_page(&app, &content);
        assert!(page.contains("[github]"));
        assert!(page.contains("https://linkedin.com"));
    }
}

//! Portfolio application state.
//!
//! [`PortfolioApp`] holds the two pieces of transient view state, the active
//! theme and the active section, and applies messages in the Elm architecture
//! style. Theme changes are persisted through [`ThemePreferences`] in the
//! same call that updates the state, so the applied theme and the stored
//! preference cannot diverge.

use crate::message::Message;
use crate::prefs::ThemePreferences;
use crate::theme::Theme;

/// The active content tab shown in the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Introduction and skills
    #[default]
    About,
    /// Project cards
    Projects,
    /// Experience timeline
    Experience,
}

impl Section {
    /// Get the display name for this section.
    pub fn name(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
        }
    }

    /// Get all sections in tab order.
    pub fn all() -> &'static [Section] {
        &[Section::About, Section::Projects, Section::Experience]
    }
}

/// Main portfolio application state.
pub struct PortfolioApp {
    theme: Theme,
    section: Section,
    prefs: ThemePreferences,
}

impl PortfolioApp {
    /// Initialize the application state.
    ///
    /// The initial theme comes from [`ThemePreferences::resolve_initial`];
    /// the initial section is About.
    pub fn new(prefs: ThemePreferences) -> Self {
        let theme = prefs.resolve_initial();
        Self {
            theme,
            section: Section::default(),
            prefs,
        }
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The active section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Update the application state in response to a message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SelectSection(section) => self.select_section(section),
            Message::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Switch to the given section. Any section is reachable from any other;
    /// there is no history.
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Flip the theme and persist the new value.
    ///
    /// Applying the theme to the view state and writing it to the store are
    /// one logical operation; callers never invoke one without the other.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.prefs.persist(self.theme);
    }
}

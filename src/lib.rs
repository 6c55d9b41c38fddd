//! folio - a themeable terminal portfolio page.
//!
//! Renders a single-page personal portfolio with a profile card, tabbed
//! sections (About, Projects, Experience), and a light/dark theme that is
//! persisted across visits.

mod app;
mod content;
mod message;
mod model;
mod prefs;
mod theme;
mod views;

pub use app::{PortfolioApp, Section};
pub use content::{ContentError, PortfolioContent};
pub use message::Message;
pub use model::{ExperienceEntry, ExperienceKind, Profile, Project, SkillGroup, SocialLink};
pub use prefs::{
    ambient_prefers_dark, MemoryStore, PreferenceError, PreferenceStore, ThemePreferences,
    THEME_KEY,
};
pub use theme::{Rgb, Theme};
pub use views::{render_page, view_about, view_experience, view_profile_card, view_projects};

#[cfg(not(target_arch = "wasm32"))]
pub use prefs::FileStore;

#[cfg(target_arch = "wasm32")]
pub use prefs::LocalStorageStore;

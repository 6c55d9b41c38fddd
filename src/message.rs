//! Application message types for the portfolio page.
//!
//! All user actions are represented as messages in the Elm architecture style.

use crate::app::Section;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A section tab was selected
    SelectSection(Section),
    /// The light/dark theme toggle was pressed
    ToggleTheme,
}

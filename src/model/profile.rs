//! Profile data shown in the card next to the section views.

use serde::{Deserialize, Serialize};

use crate::theme::Rgb;

/// The person behind the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the page header
    pub name: String,
    /// Short role line shown in the profile card
    pub headline: String,
    /// One-sentence tagline under the headline
    #[serde(default)]
    pub tagline: String,
    /// Longer introduction shown in the About section
    #[serde(default)]
    pub summary: String,
    /// Portrait image URL (rendered as a link in the terminal)
    #[serde(default)]
    pub avatar_url: String,
    /// Skill groups shown in the About section
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Social links shown in the profile card
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// A named group of skill labels (e.g. "Technical Skills").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading
    pub name: String,
    /// Skill labels rendered as tags
    pub skills: Vec<String>,
}

impl SkillGroup {
    /// Create a skill group from a heading and a list of labels.
    pub fn new(name: &str, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A social link with its display accent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    /// Free-form icon identifier (e.g. "github"); unknown identifiers
    /// render with a generic marker
    pub icon: String,
    /// Destination URL
    pub href: String,
    /// RGB accent color for the link
    pub accent: Rgb,
}

impl SocialLink {
    /// Create a social link.
    pub fn new(icon: &str, href: &str, accent: Rgb) -> Self {
        Self {
            icon: icon.to_string(),
            href: href.to_string(),
            accent,
        }
    }
}

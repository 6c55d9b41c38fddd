//! Experience entries shown in the Experience section.

use serde::{Deserialize, Serialize};

use crate::theme::Rgb;

/// Category marker for an experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    /// Employment
    Work,
    /// Degrees and studies
    Education,
    /// Prizes and recognitions
    Award,
}

impl ExperienceKind {
    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "Work",
            ExperienceKind::Education => "Education",
            ExperienceKind::Award => "Award",
        }
    }

    /// Marker glyph rendered in front of the entry.
    pub fn glyph(&self) -> &'static str {
        match self {
            ExperienceKind::Work => "◆",
            ExperienceKind::Education => "✦",
            ExperienceKind::Award => "★",
        }
    }

    /// Accent color for the marker glyph.
    pub fn accent(&self) -> Rgb {
        match self {
            ExperienceKind::Work => [129, 140, 248],
            ExperienceKind::Education => [251, 113, 133],
            ExperienceKind::Award => [251, 191, 36],
        }
    }
}

/// A single entry in the experience timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Category marker
    pub kind: ExperienceKind,
    /// Role, degree, or award title
    pub title: String,
    /// Company, university, or awarding body
    pub organization: String,
    /// Time period or year
    pub period: String,
    /// Short description
    pub description: String,
}

impl ExperienceEntry {
    /// Create an experience entry.
    pub fn new(
        kind: ExperienceKind,
        title: &str,
        organization: &str,
        period: &str,
        description: &str,
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            organization: organization.to_string(),
            period: period.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ExperienceKind::Education).unwrap();
        assert_eq!(json, "\"education\"");

        let parsed: ExperienceKind = serde_json::from_str("\"award\"").unwrap();
        assert_eq!(parsed, ExperienceKind::Award);
    }
}

//! Portfolio content loading.
//!
//! The page content (profile, projects, experience) is inert data supplied
//! by an external source: a JSON file in the user config directory, falling
//! back to the bundled sample. The core never validates or transforms it
//! beyond deserialization; the views only select which list to render.

use serde::{Deserialize, Serialize};

use crate::model::{
    ExperienceEntry, ExperienceKind, Profile, Project, SkillGroup, SocialLink,
};

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// JSON parsing error
    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error when reading the content file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the page renders, grouped by section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Profile card and About section data
    pub profile: Profile,
    /// Projects section entries
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Experience section entries
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

impl PortfolioContent {
    /// Deserialize content from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the content to JSON, e.g. as a starting point for a
    /// custom content file.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Get the default content file path.
    /// Returns None if no config directory can be determined.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        crate::prefs::config_dir().map(|dir| dir.join("content.json"))
    }

    /// Load content from the default path, falling back to the bundled
    /// sample when the file is missing or unreadable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Some(path) => path,
            None => return Self::default(),
        };
        if !path.exists() {
            log::debug!("No content file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(content) => {
                    log::info!("Loaded content from {:?}", path);
                    content
                }
                Err(e) => {
                    log::warn!("Failed to parse content file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read content file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

impl Default for PortfolioContent {
    /// The bundled sample portfolio.
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Jane Cooper".to_string(),
                headline: "Senior Software Engineer".to_string(),
                tagline: "Crafting innovative solutions at the intersection of AI and \
                          human experience."
                    .to_string(),
                summary: "With over 8 years of experience in software development, I \
                          specialize in building scalable applications with a focus on AI \
                          integration and exceptional user experiences. My expertise spans \
                          full-stack development, machine learning, and emerging \
                          technologies."
                    .to_string(),
                avatar_url: "https://placehold.co/400x400".to_string(),
                skills: vec![
                    SkillGroup::new(
                        "Technical Skills",
                        &["React", "TypeScript", "Python", "TensorFlow", "AWS", "GraphQL"],
                    ),
                    SkillGroup::new(
                        "Soft Skills",
                        &["Leadership", "Communication", "Problem Solving", "Mentoring"],
                    ),
                ],
                social: vec![
                    SocialLink::new("github", "https://github.com", [36, 41, 47]),
                    SocialLink::new("linkedin", "https://linkedin.com", [0, 119, 181]),
                    SocialLink::new("mail", "mailto:example@email.com", [234, 67, 53]),
                ],
            },
            projects: vec![
                Project::new(
                    "AI-Powered Analytics Dashboard",
                    "Built a real-time analytics platform using Next.js, TensorFlow.js",
                )
                .with_tech(&["React", "TensorFlow.js", "WebGL"])
                .with_stars(128),
                Project::new(
                    "Quantum Computing Simulator",
                    "Created a quantum circuit simulator with visual programming",
                )
                .with_tech(&["TypeScript", "Three.js", "WebAssembly"])
                .with_stars(256),
                Project::new(
                    "Neural Interface Design System",
                    "Developed a comprehensive UI kit for brain-computer interfaces",
                )
                .with_tech(&["React", "Framer Motion", "WebXR"])
                .with_stars(512),
            ],
            experience: vec![
                ExperienceEntry::new(
                    ExperienceKind::Work,
                    "Senior Software Engineer",
                    "TechCorp",
                    "2022 - Present",
                    "Led development of AI-powered features reaching 1M+ users",
                ),
                ExperienceEntry::new(
                    ExperienceKind::Education,
                    "MSc Computer Science",
                    "Tech University",
                    "2020",
                    "Specialized in Machine Learning & Computer Vision",
                ),
                ExperienceEntry::new(
                    ExperienceKind::Award,
                    "Innovation Award",
                    "Global Tech Summit",
                    "2024",
                    "Recognized for contributions to open-source AI tools",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_covers_all_sections() {
        let content = PortfolioContent::default();

        assert_eq!(content.profile.name, "Jane Cooper");
        assert_eq!(content.profile.skills.len(), 2);
        assert_eq!(content.profile.social.len(), 3);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.experience.len(), 3);
    }

    #[test]
    fn test_content_round_trips_through_json() {
        let content = PortfolioContent::default();
        let json = content.to_json().unwrap();

        let parsed = PortfolioContent::from_json(&json).unwrap();
        assert_eq!(parsed.profile.name, content.profile.name);
        assert_eq!(parsed.projects.len(), content.projects.len());
        assert_eq!(parsed.experience.len(), content.experience.len());
    }

    #[test]
    fn test_minimal_content_fills_defaults() {
        let json = r#"{"profile": {"name": "Ada", "headline": "Engineer"}}"#;
        let content = PortfolioContent::from_json(json).unwrap();

        assert_eq!(content.profile.name, "Ada");
        assert!(content.profile.skills.is_empty());
        assert!(content.projects.is_empty());
        assert!(content.experience.is_empty());
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        assert!(PortfolioContent::from_json("not json").is_err());
        assert!(PortfolioContent::from_json("{}").is_err());
    }
}

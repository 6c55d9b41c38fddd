//! Project entries shown in the Projects section.

use serde::{Deserialize, Serialize};

/// A portfolio project with its technology tags and popularity count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project title
    pub title: String,
    /// Short description
    pub description: String,
    /// Technology tags rendered as chips
    #[serde(default)]
    pub tech: Vec<String>,
    /// Star count shown next to the title
    #[serde(default)]
    pub stars: u32,
}

impl Project {
    /// Create a project with the given title and description.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tech: Vec::new(),
            stars: 0,
        }
    }

    /// Set the technology tags.
    pub fn with_tech(mut self, tech: &[&str]) -> Self {
        self.tech = tech.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the star count.
    pub fn with_stars(mut self, stars: u32) -> Self {
        self.stars = stars;
        self
    }
}

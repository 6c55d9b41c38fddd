//! Data models for the portfolio content.

mod experience;
mod profile;
mod project;

pub use experience::{ExperienceEntry, ExperienceKind};
pub use profile::{Profile, SkillGroup, SocialLink};
pub use project::Project;

//! Portfolio data model.
//!
//! Read-only reference data rendered by the screen views: projects the
//! navigation can drill into, plus the skills and certifications shown
//! on the about screen.

pub mod profile;
pub mod project;

pub use profile::{Certification, Skill, SkillKind, CERTIFICATIONS, SKILLS};
pub use project::Project;

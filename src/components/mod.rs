//! Portfolio components built on `starfolio-ui`.
//!
//! Everything here reads site content and timing from context.

mod profile_card;
mod project_card;
mod skill_badges;
mod social_button;
mod starfield;
mod typewriter;

pub use profile_card::ProfileCard;
pub use project_card::{ProjectCard, ProjectDetails};
pub use skill_badges::SkillBadges;
pub use social_button::{SocialButton, SourceLink};
pub use starfield::Starfield;
pub use typewriter::{use_typewriter, TypewriterText};

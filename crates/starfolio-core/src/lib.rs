//! Starfolio Core Library
//!
//! Behaviour behind the portfolio site, free of any UI framework.
//!
//! ## Overview
//!
//! - **typewriter**: phrase cycler that reveals and deletes text one
//!   character at a time, plus a tokio driver that owns its single timer
//! - **rotation**: per-frame angle accumulator for the starfield
//! - **starfield**: seeded star shell and its perspective projection
//! - **content**: profile, skills, social links and projects
//! - **config**: theme and timing configuration
//!
//! ## Quick Start
//!
//! ```ignore
//! use starfolio_core::{SiteContent, Typewriter, TypewriterConfig, TypewriterDriver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = SiteContent::default();
//!     let typewriter = Typewriter::new(content.profile.taglines, TypewriterConfig::default())?;
//!
//!     let driver = TypewriterDriver::spawn(typewriter);
//!     let mut rx = driver.subscribe();
//!     while rx.changed().await.is_ok() {
//!         println!("{}", rx.borrow().displayed);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod motion;
pub mod rotation;
pub mod starfield;
pub mod typewriter;

// Re-exports
pub use config::{SiteConfig, Theme};
pub use content::{Profile, Project, SiteContent, Skill, SocialKind, SocialLink, TechIcon, Technology};
pub use error::{SiteError, SiteResult};
pub use motion::MotionConfig;
pub use rotation::{Rotation, RotationDriver};
pub use starfield::{StarLayer, Starfield, StarfieldConfig, Viewport};
pub use typewriter::{
    Mode, Timeline, Transition, Typewriter, TypewriterConfig, TypewriterDriver, TypewriterSnapshot,
};

//! Page components, one per route.

mod home;
mod projects;

pub use home::Home;
pub use projects::Projects;

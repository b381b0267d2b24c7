//! Project configuration loading and project detection

pub mod detect;
pub mod project;

pub use detect::{detect_project, ProjectInfo};
pub use project::{Aliases, ProjectConfig, TailwindConfig};

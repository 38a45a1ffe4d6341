pub mod portfolio;
pub mod section;

pub use portfolio::{Portfolio, Project, ProjectStatus};
pub use section::Section;

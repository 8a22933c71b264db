pub mod args;
pub mod validation;

pub use args::{Args, Commands};
pub use validation::validate_project_name;

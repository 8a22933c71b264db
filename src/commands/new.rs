use crate::cli::validate_project_name;
use crate::config::load_config;
use crate::error::Result;
use crate::project::{template_document, ProjectStore};

pub fn new_command(name: &str) -> Result<()> {
    validate_project_name(name)?;

    let config = load_config()?;
    let store = super::open_store(&config)?;
    store.create(name, &template_document(name)?)?;

    match store.path(name) {
        Some(path) => println!("Created project '{}' at {}", name, path.display()),
        None => println!("Created project '{}'", name),
    }
    Ok(())
}

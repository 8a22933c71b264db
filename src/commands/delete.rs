use crate::cli::validate_project_name;
use crate::config::load_config;
use crate::error::Result;
use crate::project::ProjectStore;

pub fn delete_command(name: &str) -> Result<()> {
    validate_project_name(name)?;

    let config = load_config()?;
    let store = super::open_store(&config)?;
    store.delete(name)?;

    println!("Deleted project '{}'", name);
    Ok(())
}

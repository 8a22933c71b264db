use crate::cli::validate_project_name;
use crate::config::load_config;
use crate::error::{Result, ReviveError};
use crate::project::ProjectStore;

pub fn edit_command(name: &str) -> Result<()> {
    validate_project_name(name)?;

    let config = load_config()?;
    let store = super::open_store(&config)?;

    // Surfaces a missing project before an editor opens an empty buffer
    store.read(name)?;
    let path = store
        .path(name)
        .ok_or_else(|| ReviveError::NotFound(format!("project '{}'", name)))?;

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| {
            ReviveError::Config(format!(
                "Failed to open editor '{}': {}. Set EDITOR environment variable to your preferred editor.",
                editor, e
            ))
        })?;

    if !status.success() {
        return Err(ReviveError::Config(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }
    Ok(())
}

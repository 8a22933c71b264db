use crate::build::build_project;
use crate::cli::validate_project_name;
use crate::config::load_config;
use crate::error::Result;
use crate::tmux::is_inside_tmux;

pub fn build_command(name: &str) -> Result<()> {
    validate_project_name(name)?;

    let config = load_config()?;
    let store = super::open_store(&config)?;
    let tmux = super::system_tmux(&config);

    let project = build_project(&tmux, &store, name, is_inside_tmux())?;

    println!("Created tmux session: {}", project.name);
    println!("Attach with: tmux attach -t {}", project.name);
    Ok(())
}

pub mod build;
pub mod delete;
pub mod edit;
pub mod freeze;
pub mod list;
pub mod new;

pub use build::build_command;
pub use delete::delete_command;
pub use edit::edit_command;
pub use freeze::freeze_command;
pub use list::list_command;
pub use new::new_command;

use crate::config::{get_projects_dir, Config};
use crate::error::Result;
use crate::process::SystemRunner;
use crate::project::FileStore;
use crate::tmux::Tmux;

fn open_store(config: &Config) -> Result<FileStore> {
    Ok(FileStore::new(get_projects_dir(config)?))
}

fn system_tmux(config: &Config) -> Tmux<SystemRunner> {
    Tmux::with_binary(SystemRunner, &config.tmux.get_binary())
}

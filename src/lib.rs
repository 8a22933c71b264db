pub mod build;
pub mod config;
pub mod error;
pub mod freeze;
pub mod process;
pub mod project;
pub mod session;
pub mod tmux;

pub use config::get_config_dir;
pub use config::get_projects_dir;
pub use config::load_config;
pub use config::save_config;
pub use config::Config;

pub use error::{Result, ReviveError};

pub use build::{build_project, realize_project};
pub use freeze::{
    capture_session, derive_project, freeze_session, resolve_session, SessionResolution,
};
pub use process::{CommandBuilder, ProcessRunner, SystemRunner};
pub use project::types::{PaneSpec, WindowSpec};
pub use project::{decode_project, encode_project, FileStore, Project, ProjectStore};
pub use session::{Pane, Session, Window};
pub use tmux::{is_inside_tmux, Tmux};

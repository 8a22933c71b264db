pub mod paths;
pub mod persistence;
pub mod schema;

pub use paths::*;
pub use persistence::*;
pub use schema::*;

fn default_tmux_binary() -> String {
    crate::tmux::DEFAULT_BINARY.to_string()
}

pub mod types;

pub use types::{Pane, Session, Window};

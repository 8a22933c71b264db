pub mod codec;
pub mod store;
pub mod types;

pub use codec::{decode_project, encode_project, template_document};
pub use store::{FileStore, ProjectStore};
pub use types::Project;

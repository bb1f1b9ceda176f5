//! Command implementations for wiki-cli

pub mod info;
pub mod paths;
pub mod properties;
pub mod protocol;
pub mod root_page;

pub use info::run_info;
pub use paths::run_paths;
pub use properties::{run_properties, run_property};
pub use protocol::run_protocol;
pub use root_page::run_root_page;

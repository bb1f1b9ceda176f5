//! Filesystem abstraction for the wiki runtime
//!
//! Provides normalized path handling, the well-known directory names of a
//! wiki root, and the flat [`PropertyStore`] loaded at startup.

pub mod constants;
pub mod error;
pub mod path;
pub mod properties;

pub use constants::WikiPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use properties::{PropertyLoader, PropertyStore};

//! Reading, initializing and bumping a semantic version kept in a `VERSION` file.

pub mod bump;
pub mod logging;
pub mod store;
pub mod version;

pub use bump::{BumpError, Config, DEFAULT_INITIAL_VERSION, DEFAULT_VERSION_FILE};
pub use store::{StoreError, VersionFile, WriteMode};
pub use version::{IncrementKind, ParseError, Version, VersionError};

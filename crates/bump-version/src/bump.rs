#[cfg(test)]
#[path = "bump_test.rs"]
mod test;

use std::path::PathBuf;

use thiserror::Error;

use crate::store::{StoreError, VersionFile, WriteMode};
use crate::version::{IncrementKind, ParseError, Version, VersionError};

pub const DEFAULT_VERSION_FILE: &str = "VERSION";
pub const DEFAULT_INITIAL_VERSION: Version = Version::new(0, 1, 0);

#[derive(Debug, Error)]
pub enum BumpError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Settings shared by all operations of a single invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The file holding the current version.
    pub version_file: PathBuf,
    /// The version written by [`init`] when none is given explicitly.
    pub initial_version: Version,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from(DEFAULT_VERSION_FILE),
            initial_version: DEFAULT_INITIAL_VERSION,
        }
    }
}

impl Config {
    pub fn with_version_file(self, version_file: impl Into<PathBuf>) -> Self {
        Self { version_file: version_file.into(), ..self }
    }

    pub fn store(&self) -> VersionFile {
        VersionFile::new(&self.version_file)
    }
}

/// Advances the version by `kind` and stores the result according to `mode`.
///
/// The starting point is `explicit` when given, in which case the version file is never read.
/// Otherwise it is the content of the version file. Nothing is written if any step fails.
pub fn bump(
    config: &Config,
    kind: IncrementKind,
    explicit: Option<&str>,
    mode: WriteMode,
) -> Result<Version, BumpError> {
    let store = config.store();
    let current = match explicit {
        Some(text) => Version::parse(text)?,
        None => store.read()?,
    };
    let next = current.increment(kind)?;
    log::info!("Bumping {kind} version: {current} -> {next}.");
    Ok(store.write(next, mode)?)
}

/// Writes the explicit version, or the configured initial one, into a fresh version file.
pub fn init(config: &Config, explicit: Option<&str>) -> Result<Version, BumpError> {
    let version = match explicit {
        Some(text) => Version::parse(text)?,
        None => config.initial_version,
    };
    Ok(config.store().initialize(version)?)
}

pub fn show(config: &Config) -> Result<Version, BumpError> {
    Ok(config.store().read()?)
}

pub fn render_with_prefix(version: Version, prefix: &str) -> String {
    format!("{prefix}{version}")
}

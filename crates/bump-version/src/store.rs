//! Persistence of a [`Version`] in a plain text file.

#[cfg(test)]
#[path = "store_test.rs"]
mod test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::version::{ParseError, Version};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Version file `{}` not found.", .path.display())]
    NotFound { path: PathBuf, source: io::Error },
    #[error("Permission denied for version file `{}`.", .path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },
    #[error("Failed accessing version file `{}`.", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl StoreError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound { path, source },
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path, source },
            _ => StoreError::Io { path, source },
        }
    }
}

/// Whether a write actually reaches the file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Persist,
    DryRun,
}

impl WriteMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { WriteMode::DryRun } else { WriteMode::Persist }
    }
}

/// A version store backed by a single file containing `major.minor.patch\n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read(&self) -> Result<Version, StoreError> {
        log::debug!("Reading version from {}.", self.path.display());
        let content =
            fs::read_to_string(&self.path).map_err(|err| StoreError::from_io(&self.path, err))?;
        Ok(Version::parse(&content)?)
    }

    /// Replaces the whole file content with `version`, unless `mode` is a dry run.
    pub fn write(&self, version: Version, mode: WriteMode) -> Result<Version, StoreError> {
        match mode {
            WriteMode::Persist => {
                log::debug!("Writing version {version} to {}.", self.path.display());
                fs::write(&self.path, format!("{version}\n"))
                    .map_err(|err| StoreError::from_io(&self.path, err))?;
            }
            WriteMode::DryRun => {
                log::info!("Dry run, not writing version {version} to {}.", self.path.display());
            }
        }
        Ok(version)
    }

    /// Creates the file holding `version`. An existing file is overwritten.
    pub fn initialize(&self, version: Version) -> Result<Version, StoreError> {
        if self.path.exists() {
            log::info!("Overwriting existing version file {}.", self.path.display());
        }
        self.write(version, WriteMode::Persist)
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod test;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A failure to read a `major.minor.patch` triple out of text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid version `{text}`: expected 3 dot-separated components, found {found}.")]
    SegmentCount { text: String, found: usize },
    #[error("Invalid version `{text}`: component {index} (`{segment}`) is not a valid number.")]
    InvalidSegment { text: String, index: usize, segment: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid increment kind `{0}`, expected one of `major`, `minor` or `patch`.")]
    InvalidIncrementKind(String),
    #[error("Cannot bump the {kind} component of {version}: value would overflow.")]
    Overflow { version: Version, kind: IncrementKind },
}

/// Which component of a [`Version`] an increment advances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IncrementKind {
    Major,
    Minor,
    Patch,
}

impl IncrementKind {
    pub const ALL: [IncrementKind; 3] =
        [IncrementKind::Major, IncrementKind::Minor, IncrementKind::Patch];

    /// The name of the command line subcommand performing this increment.
    pub fn subcommand(self) -> &'static str {
        match self {
            IncrementKind::Major => "major",
            IncrementKind::Minor => "minor",
            IncrementKind::Patch => "patch",
        }
    }
}

impl fmt::Display for IncrementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}

impl FromStr for IncrementKind {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncrementKind::ALL
            .into_iter()
            .find(|kind| kind.subcommand() == s)
            .ok_or_else(|| VersionError::InvalidIncrementKind(s.to_string()))
    }
}

/// A semantic version without pre-release or build metadata.
///
/// Ordering compares `major`, then `minor`, then `patch`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Parses `text` after trimming surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        let segments: Vec<&str> = trimmed.split('.').collect();
        let [major, minor, patch] = segments[..] else {
            return Err(ParseError::SegmentCount {
                text: trimmed.to_string(),
                found: segments.len(),
            });
        };
        let component = |index: usize, segment: &str| {
            parse_component(segment).ok_or_else(|| ParseError::InvalidSegment {
                text: trimmed.to_string(),
                index,
                segment: segment.to_string(),
            })
        };
        Ok(Self::new(component(0, major)?, component(1, minor)?, component(2, patch)?))
    }

    /// Returns the version following `self` for the given kind of change.
    ///
    /// ```
    /// use bump_version::{IncrementKind, Version};
    /// let next = Version::new(1, 4, 2).increment(IncrementKind::Minor).unwrap();
    /// assert_eq!(next, Version::new(1, 5, 0));
    /// ```
    pub fn increment(self, kind: IncrementKind) -> Result<Self, VersionError> {
        let overflow = || VersionError::Overflow { version: self, kind };
        Ok(match kind {
            IncrementKind::Major => {
                Self::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            IncrementKind::Minor => {
                Self::new(self.major, self.minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            IncrementKind::Patch => {
                Self::new(self.major, self.minor, self.patch.checked_add(1).ok_or_else(overflow)?)
            }
        })
    }

    /// In-place form of [`Version::increment`]. On failure `self` is left untouched.
    pub fn bump(&mut self, kind: IncrementKind) -> Result<(), VersionError> {
        *self = self.increment(kind)?;
        Ok(())
    }
}

/// Accepts plain decimal digits, with a leading zero only for `0` itself.
fn parse_component(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

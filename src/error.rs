// std imports
use std::fmt;

// third-party imports
use thiserror::Error;

/// ValidationError describes a syntax problem found in a pattern by [`validate`](crate::validate).
///
/// Each variant carries the byte offset of the character that caused the failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("unclosed bracket at offset {offset}")]
    UnclosedBracket { offset: usize },
    #[error("empty bracket at offset {offset}")]
    EmptyBracket { offset: usize },
    #[error("trailing backslash at offset {offset}")]
    TrailingBackslash { offset: usize },
}

impl ValidationError {
    /// Returns the byte offset of the offending character in the pattern.
    pub fn offset(&self) -> usize {
        match *self {
            Self::UnclosedBracket { offset } => offset,
            Self::EmptyBracket { offset } => offset,
            Self::TrailingBackslash { offset } => offset,
        }
    }
}

/// Error is an error which may occur when checking pattern collections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid pattern {pattern:?} at position {index}{}: {source}", ListSuffix(.list))]
    InvalidPattern {
        list: Option<IncludeExclude>,
        index: usize,
        pattern: String,
        source: ValidationError,
    },
}

/// IncludeExclude names one of the two pattern lists of a [`Filter`](crate::Filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeExclude {
    Include,
    Exclude,
}

impl fmt::Display for IncludeExclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => write!(f, "include"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}

struct ListSuffix<'a>(&'a Option<IncludeExclude>);

impl fmt::Display for ListSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(list) => write!(f, " in {} list", list),
            None => Ok(()),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

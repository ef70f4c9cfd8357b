// std imports
use std::slice;

// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::{
    combine::{match_all, match_any},
    error::{Error, IncludeExclude, Result},
    validate::validate,
};

// ---

/// Mode defines how results of individual patterns in a [`PatternSet`] are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// At least one pattern must match.
    #[default]
    Any,
    /// Every pattern must match.
    All,
}

// ---

/// An ordered collection of patterns combined according to a [`Mode`].
///
/// It is meant to be embedded into configuration structures and can be
/// deserialized either from a table with `mode` and `patterns` fields or from a
/// bare list of patterns, which uses [`Mode::Any`].
///
/// # Examples
///
/// ```
/// use globmatch::{Mode, PatternSet};
///
/// let sources = PatternSet::new(Mode::Any, ["*.zig", "*.c", "*.h"]);
/// assert!(sources.matches("main.zig"));
/// assert!(!sources.matches("script.py"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "PatternSetRepr")]
pub struct PatternSet {
    pub mode: Mode,
    pub patterns: Vec<String>,
}

impl PatternSet {
    pub fn new<I>(mode: Mode, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            mode,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Validates every pattern in order and reports the first failure.
    pub fn validate(&self) -> Result<()> {
        validate_list(&self.patterns, None)
    }

    /// Tests `text` against the patterns, combining results according to the mode.
    ///
    /// Follows the vacuous rules of [`match_any`] and [`match_all`] for an empty set.
    pub fn matches(&self, text: impl AsRef<[u8]>) -> bool {
        let result = match self.mode {
            Mode::Any => match_any(&self.patterns, text.as_ref()),
            Mode::All => match_all(&self.patterns, text.as_ref()),
        };
        log::trace!(
            "pattern set ({:?}, {} patterns) {} {:?}",
            self.mode,
            self.patterns.len(),
            if result { "matches" } else { "does not match" },
            String::from_utf8_lossy(text.as_ref()),
        );
        result
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternSetRepr {
    List(Vec<String>),
    Table {
        #[serde(default)]
        mode: Mode,
        patterns: Vec<String>,
    },
}

impl From<PatternSetRepr> for PatternSet {
    fn from(repr: PatternSetRepr) -> Self {
        match repr {
            PatternSetRepr::List(patterns) => Self {
                mode: Mode::Any,
                patterns,
            },
            PatternSetRepr::Table { mode, patterns } => Self { mode, patterns },
        }
    }
}

// ---

pub(crate) fn validate_list(patterns: &[String], list: Option<IncludeExclude>) -> Result<()> {
    for (index, pattern) in patterns.iter().enumerate() {
        if let Err(source) = validate(pattern) {
            log::debug!("rejecting pattern {pattern:?} at position {index}: {source}");
            return Err(Error::InvalidPattern {
                list,
                index,
                pattern: pattern.clone(),
                source,
            });
        }
    }

    Ok(())
}

// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::{
    combine::match_any,
    error::{IncludeExclude, Result},
    set::validate_list,
};

/// Include/exclude selection over two pattern lists.
///
/// A text is accepted when it matches any include pattern (or the include list
/// is empty) and matches none of the exclude patterns.
///
/// # Examples
///
/// ```
/// use globmatch::Filter;
///
/// let filter = Filter::new(["*.rs"], ["*_test.rs"]);
/// assert!(filter.accepts("lib.rs"));
/// assert!(!filter.accepts("lib_test.rs"));
/// assert!(!filter.accepts("README.md"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Filter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Filter {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Validates include patterns first, then exclude patterns, and reports the first failure.
    pub fn validate(&self) -> Result<()> {
        validate_list(&self.include, Some(IncludeExclude::Include))?;
        validate_list(&self.exclude, Some(IncludeExclude::Exclude))
    }

    pub fn accepts(&self, text: impl AsRef<[u8]>) -> bool {
        let text = text.as_ref();
        let setting = self.setting(text);
        log::trace!("filter: {:?} is {:?}", String::from_utf8_lossy(text), setting);
        setting == IncludeExclude::Include
    }

    /// Returns whether `text` ends up included or excluded.
    ///
    /// Exclude patterns take precedence over include patterns.
    pub fn setting(&self, text: impl AsRef<[u8]>) -> IncludeExclude {
        let text = text.as_ref();
        if match_any(&self.exclude, text) {
            IncludeExclude::Exclude
        } else if self.include.is_empty() || match_any(&self.include, text) {
            IncludeExclude::Include
        } else {
            IncludeExclude::Exclude
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

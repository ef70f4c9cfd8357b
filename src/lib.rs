//! Glob-style pattern matching for filter rules.
//!
//! This crate decides whether a text matches a glob-style pattern without touching
//! the filesystem. It is meant for ignore lists, file selection and build
//! inclusion/exclusion rules.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more bytes
//! - `?` - Matches exactly one byte
//! - `[abc]`, `[a-z]`, `[a-z0-9_]` - Matches one byte from a set of members and ranges
//! - `\*`, `\?`, `\[`, `\\` - Escaped literal characters
//! - `!` at the very start - Negates the result for the rest of the pattern
//! - Any other character matches itself, case-sensitively
//!
//! Patterns are interpreted on every call; there is no compiled form.
//! Matching works on bytes, so multi-byte UTF-8 characters take several `?`.
//!
//! # Examples
//!
//! ```
//! use globmatch::{match_all, match_any, matches};
//!
//! assert!(matches("*.txt", "readme.txt"));
//! assert!(!matches("Letter[0-9]", "Letter10"));
//! assert!(matches("!*.tmp", "notes.md"));
//!
//! assert!(match_any(["*.zig", "*.c", "*.h"], "main.zig"));
//! assert!(match_all(["test_*", "*.zig"], "test_main.zig"));
//! ```
//!
//! # Validation
//!
//! [`matches`] is total: malformed patterns just do not match. Call [`validate`]
//! beforehand to report them instead:
//!
//! ```
//! use globmatch::{ValidationError, matches, validate};
//!
//! assert!(!matches("[abc", "a"));
//! assert_eq!(validate("[abc"), Err(ValidationError::UnclosedBracket { offset: 0 }));
//! ```

// public modules
pub mod error;

// private modules
mod class;
mod combine;
mod filter;
mod pattern;
mod set;
mod validate;

// public uses
pub use combine::{match_all, match_any};
pub use error::{Error, IncludeExclude, Result, ValidationError};
pub use filter::Filter;
pub use pattern::{matches, matches_core};
pub use set::{Mode, PatternSet};
pub use validate::validate;

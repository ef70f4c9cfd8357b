// local imports
use crate::pattern::matches;

/// Tests whether at least one of the `patterns` matches `text`.
///
/// Returns `false` for an empty collection. Stops at the first matching pattern.
///
/// # Examples
///
/// ```
/// use globmatch::match_any;
///
/// let sources = ["*.zig", "*.c", "*.h"];
/// assert!(match_any(sources, "main.zig"));
/// assert!(!match_any(sources, "script.py"));
/// assert!(!match_any(&[] as &[&str], "anything"));
/// ```
pub fn match_any<I>(patterns: I, text: impl AsRef<[u8]>) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let text = text.as_ref();
    patterns.into_iter().any(|pattern| matches(pattern, text))
}

/// Tests whether every one of the `patterns` matches `text`.
///
/// Returns `true` for an empty collection. Stops at the first non-matching pattern.
///
/// # Examples
///
/// ```
/// use globmatch::match_all;
///
/// let rules = ["test_*", "*.zig"];
/// assert!(match_all(rules, "test_main.zig"));
/// assert!(!match_all(rules, "test_main.c"));
/// assert!(match_all(&[] as &[&str], "anything"));
/// ```
pub fn match_all<I>(patterns: I, text: impl AsRef<[u8]>) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let text = text.as_ref();
    patterns.into_iter().all(|pattern| matches(pattern, text))
}

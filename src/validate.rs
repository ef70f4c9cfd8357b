// third-party imports
use memchr::{memchr, memchr2};

// local imports
use crate::error::ValidationError;

/// Checks a pattern for syntax problems without matching it against anything.
///
/// The check is purely syntactic and it is never performed implicitly by
/// [`matches`](crate::matches), which treats malformed patterns as non-matching instead.
///
/// # Examples
///
/// ```
/// use globmatch::{ValidationError, validate};
///
/// assert_eq!(validate("[a-z]*"), Ok(()));
/// assert_eq!(validate("[abc"), Err(ValidationError::UnclosedBracket { offset: 0 }));
/// assert_eq!(validate("x[]"), Err(ValidationError::EmptyBracket { offset: 1 }));
/// assert_eq!(validate(r"test\"), Err(ValidationError::TrailingBackslash { offset: 4 }));
/// ```
pub fn validate(pattern: impl AsRef<[u8]>) -> Result<(), ValidationError> {
    let pattern = pattern.as_ref();
    let mut i = 0;

    while let Some(offset) = memchr2(b'\\', b'[', &pattern[i..]) {
        i += offset;
        match pattern[i] {
            b'\\' => {
                if i + 1 == pattern.len() {
                    return Err(ValidationError::TrailingBackslash { offset: i });
                }
                i += 2;
            }
            _ => match memchr(b']', &pattern[i + 1..]) {
                None => return Err(ValidationError::UnclosedBracket { offset: i }),
                Some(0) => return Err(ValidationError::EmptyBracket { offset: i }),
                Some(len) => i += len + 2,
            },
        }
    }

    Ok(())
}

/// Tests whether `byte` belongs to a character class.
///
/// `class` is the content between `[` and `]`. It is scanned left to right, and
/// each position is either a `start-end` range (when a `-` follows and at least
/// one byte follows the `-`) or a single literal member. Bounds are compared as raw
/// byte values, so a range with `start > end` contains nothing.
#[inline]
pub(crate) fn contains(mut class: &[u8], byte: u8) -> bool {
    loop {
        match class {
            [start, b'-', end, rest @ ..] => {
                if (*start..=*end).contains(&byte) {
                    return true;
                }
                class = rest;
            }
            [member, rest @ ..] => {
                if *member == byte {
                    return true;
                }
                class = rest;
            }
            [] => return false,
        }
    }
}

#[cfg(test)]
mod tests;

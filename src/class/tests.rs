use rstest::rstest;

use super::*;

#[rstest]
#[case(b"abc", b'a', true)]
#[case(b"abc", b'c', true)]
#[case(b"abc", b'd', false)]
#[case(b"CB", b'C', true)]
#[case(b"CB", b'c', false)]
fn test_members(#[case] class: &[u8], #[case] byte: u8, #[case] expected: bool) {
    assert_eq!(contains(class, byte), expected);
}

#[rstest]
#[case(b"0-9", b'0', true)]
#[case(b"0-9", b'5', true)]
#[case(b"0-9", b'9', true)]
#[case(b"0-9", b'a', false)]
#[case(b"a-z", b'A', false)]
#[case(b"a-zA-Z", b'Q', true)]
#[case(b"a-z0-9_", b'_', true)]
#[case(b"a-z0-9_", b'-', false)]
fn test_ranges(#[case] class: &[u8], #[case] byte: u8, #[case] expected: bool) {
    assert_eq!(contains(class, byte), expected);
}

#[rstest]
#[case(b'z')]
#[case(b'm')]
#[case(b'a')]
fn test_reversed_range_is_empty(#[case] byte: u8) {
    assert!(!contains(b"z-a", byte));
}

#[rstest]
#[case(b"a-", b'a', true)]
#[case(b"a-", b'-', true)]
#[case(b"a-", b'b', false)]
#[case(b"-a", b'-', true)]
#[case(b"-a", b'a', true)]
#[case(b"-", b'-', true)]
fn test_dash_without_range(#[case] class: &[u8], #[case] byte: u8, #[case] expected: bool) {
    assert_eq!(contains(class, byte), expected);
}

#[test]
fn test_range_then_dash() {
    // `a-c` is a range, the following `-` and `e` are plain members.
    let class = b"a-c-e";
    assert!(contains(class, b'b'));
    assert!(contains(class, b'-'));
    assert!(contains(class, b'e'));
    assert!(!contains(class, b'd'));
}

#[test]
fn test_dash_as_range_bound() {
    assert!(contains(b"--/", b'.'));
    assert!(contains(b"!--", b'+'));
    assert!(!contains(b"!--", b'.'));
}

#[test]
fn test_high_bytes() {
    assert!(contains(b"\x80-\xff", 0xc3));
    assert!(!contains(b"\x80-\xff", b'a'));
}

//! PostgreSQL lexical character classes.
//!
//! All classes below only distinguish ASCII ranges, so they are byte
//! predicates: every byte of a multi-byte UTF-8 sequence (`>= 0x80`) counts
//! as an identifier character, which matches how the scanner must treat
//! non-ASCII identifiers and dollar-quote tags.

/// C0 control characters.
#[inline]
pub const fn is_control(b: u8) -> bool {
    b <= 0x1f
}

/// ASCII punctuation, space included.
#[inline]
pub const fn is_ascii_punctuation(b: u8) -> bool {
    matches!(b, 0x20..=0x2f | 0x3a..=0x40 | 0x5b..=0x60 | 0x7b..=0x7e)
}

/// Can `b` start an unquoted identifier or a dollar-quote tag?
/// `_` is the only punctuation allowed.
#[inline]
pub const fn is_identifier_start(b: u8) -> bool {
    !is_control(b) && !b.is_ascii_digit() && (!is_ascii_punctuation(b) || b == b'_')
}

/// Can `b` appear after the first character of an unquoted identifier?
/// `_` and `$` are the only punctuation allowed.
#[inline]
pub const fn is_identifier_continue(b: u8) -> bool {
    !is_control(b) && (!is_ascii_punctuation(b) || b == b'_' || b == b'$')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identifier_start() {
        assert!(is_identifier_start(b'a'));
        assert!(is_identifier_start(b'Z'));
        assert!(is_identifier_start(b'_'));
        assert!(is_identifier_start(0x80)); // any byte of a multi-byte char
        assert!(!is_identifier_start(b'0'));
        assert!(!is_identifier_start(b'$'));
        assert!(!is_identifier_start(b' '));
        assert!(!is_identifier_start(b'\n'));
        assert!(!is_identifier_start(0x00));
    }

    #[test]
    fn identifier_continue() {
        assert!(is_identifier_continue(b'a'));
        assert!(is_identifier_continue(b'0'));
        assert!(is_identifier_continue(b'_'));
        assert!(is_identifier_continue(b'$'));
        assert!(is_identifier_continue(0xe6)); // first byte of '标'
        assert!(!is_identifier_continue(b';'));
        assert!(!is_identifier_continue(b' '));
        assert!(!is_identifier_continue(0x1f));
    }
}

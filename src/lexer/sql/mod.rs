//! PostgreSQL statement splitter.
//!
//! One-pass lexical segmentation of a SQL script into individual statement
//! texts: comments are dropped, string literals, quoted identifiers and
//! dollar-quoted bodies are kept verbatim, and a `;` outside all of them
//! terminates a statement. No grammar is involved and no input is rejected:
//! an unterminated construct silently consumes the remainder of the input,
//! like the PostgreSQL lexer truncates unterminated comments.

use memchr::memchr;

use crate::dialect::{is_identifier_continue, is_identifier_start};
use crate::lexer::{Scanner, Splitter};


/// Statement piece
pub type Segment<'input> = (&'input str, SegmentType);

/// Segment classification
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SegmentType {
    /// Verbatim statement text
    Text,
    /// A statement-terminating `;`
    Terminator,
}

/// Segmenter for PostgreSQL scripts.
///
/// Emits `Text` and `Terminator` segments and skips comments. The amount
/// consumed always advances, so a whole scan is linear in the input length.
#[derive(Clone, Copy, Debug, Default)]
pub struct Segmenter;

impl Segmenter {
    /// Constructor
    pub fn new() -> Segmenter {
        Segmenter
    }
}

impl Splitter for Segmenter {
    type SegmentType = SegmentType;

    fn split<'input>(&mut self, data: &'input str) -> (Option<Segment<'input>>, usize) {
        match data.as_bytes()[0] {
            b'/' => {
                if let Some(&b'*') = data.as_bytes().get(1) {
                    // eat comment
                    return (None, block_comment_end(data.as_bytes()));
                }
                plain(data)
            }
            b'-' => {
                if let Some(&b'-') = data.as_bytes().get(1) {
                    // eat comment, up to but not including the line feed:
                    // the line feed belongs to the following statement text.
                    return (
                        None,
                        match memchr(b'\n', data.as_bytes()) {
                            Some(i) => i,
                            _ => data.len(),
                        },
                    );
                }
                plain(data)
            }
            b';' => (Some((&data[..1], SegmentType::Terminator)), 1),
            quote @ (b'\'' | b'"') => literal(data, quote),
            b'$' => dollar_quote(data),
            b if is_identifier_start(b) => identifierish(data),
            _ => plain(data),
        }
    }
}

/// Returns the offset just past `*/` closing the comment opened at the start
/// of `bytes`, honouring nesting; an unterminated comment swallows the
/// remaining input.
fn block_comment_end(bytes: &[u8]) -> usize {
    debug_assert!(bytes[0] == b'/' && bytes[1] == b'*');
    let mut depth = 1;
    let mut i = 2;
    while i < bytes.len() {
        if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'*') {
            depth += 1;
            i += 2;
        } else if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
            i += 2;
            if depth == 1 {
                break;
            }
            depth -= 1;
        } else {
            i += 1;
        }
    }
    i
}

/// Quoted literal or quoted identifier, kept verbatim, quotes included.
///
/// The closing quote counts only when not preceded by an odd run of
/// backslashes (the historical escape-string rule). An unterminated literal
/// consumes the remaining input.
fn literal(data: &str, quote: u8) -> (Option<Segment<'_>>, usize) {
    debug_assert_eq!(data.as_bytes()[0], quote);
    let bytes = data.as_bytes();
    let mut in_backslash = false;
    let mut i = 1;
    while i < bytes.len() {
        let b = bytes[i];
        if b == quote && !in_backslash {
            i += 1;
            break;
        }
        in_backslash = b == b'\\' && !in_backslash;
        i += 1;
    }
    (Some((&data[..i], SegmentType::Text)), i)
}

/// Dollar-quoted body, kept verbatim, delimiters included.
fn dollar_quote(data: &str) -> (Option<Segment<'_>>, usize) {
    let bytes = data.as_bytes();
    debug_assert_eq!(bytes[0], b'$');
    let mut i = 1;
    let tag: &[u8] = match bytes.get(i) {
        Some(&b'$') => {
            // `$$`
            i += 1;
            b""
        }
        Some(&b) if is_identifier_start(b) => {
            i += 1;
            while i < bytes.len() && bytes[i] != b'$' && is_identifier_continue(bytes[i]) {
                i += 1;
            }
            if bytes.get(i) != Some(&b'$') {
                // no closing `$` after the tag name: not a quote opener
                return (Some((&data[..i], SegmentType::Text)), i);
            }
            let tag = &bytes[1..i];
            i += 1;
            tag
        }
        _ => {
            // `$` not followed by a valid tag is ordinary text
            return (Some((&data[..1], SegmentType::Text)), 1);
        }
    };
    // Scan for the closing delimiter `$tag$`. A mismatch restarts at the
    // mismatching `$`, not past it: overlapping candidates must be
    // re-checked so that a tag which is a suffix of other text (`$ab$`
    // right after `$cab$` text) still closes the quote.
    let end = loop {
        match memchr(b'$', &bytes[i..]) {
            None => break bytes.len(),
            Some(d) => i += d + 1,
        }
        let mut m = 0;
        let mut closed = false;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'$' {
                if m == tag.len() {
                    closed = true;
                    i += 1;
                }
                break;
            } else if m < tag.len() && b == tag[m] {
                i += 1;
                m += 1;
            } else {
                break;
            }
        }
        if closed {
            break i;
        }
        if i >= bytes.len() {
            // unterminated: no statement boundary in the rest of the input
            break bytes.len();
        }
    };
    (Some((&data[..end], SegmentType::Text)), end)
}

/// Unquoted identifier run, consumed as a single unit so that a `$` right
/// after an identifier character never opens a dollar quote.
fn identifierish(data: &str) -> (Option<Segment<'_>>, usize) {
    let bytes = data.as_bytes();
    debug_assert!(is_identifier_start(bytes[0]));
    // bytes[0] is_identifier_start => skip it
    let mut i = 1;
    while i < bytes.len() && is_identifier_continue(bytes[i]) {
        i += 1;
    }
    (Some((&data[..i], SegmentType::Text)), i)
}

/// Maximal run of characters which cannot begin a comment, a quoted region,
/// an identifier or a terminator.
fn plain(data: &str) -> (Option<Segment<'_>>, usize) {
    let bytes = data.as_bytes();
    let mut i = 1;
    while i < bytes.len() && is_plain(bytes[i]) {
        i += 1;
    }
    (Some((&data[..i], SegmentType::Text)), i)
}

fn is_plain(b: u8) -> bool {
    !matches!(b, b'/' | b'-' | b'\'' | b'"' | b'$' | b';') && !is_identifier_start(b)
}

/// Iterator over the trimmed statement texts of a SQL script.
pub struct Statements<'input> {
    scanner: Scanner<'input, Segmenter>,
    pending: String,
}

impl<'input> Statements<'input> {
    /// Constructor
    pub fn new(sql: &'input str) -> Statements<'input> {
        Statements {
            scanner: Scanner::new(sql, Segmenter::new()),
            pending: String::new(),
        }
    }

    /// Current line number
    pub fn line(&self) -> u64 {
        self.scanner.line()
    }
    /// Current column number (byte offset, not char offset)
    pub fn column(&self) -> usize {
        self.scanner.column()
    }
}

impl Iterator for Statements<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.scanner.scan() {
                None => {
                    // trailing fragment without terminator
                    let last = std::mem::take(&mut self.pending);
                    let last = last.trim();
                    return if last.is_empty() {
                        None
                    } else {
                        Some(last.to_owned())
                    };
                }
                Some((text, SegmentType::Text)) => self.pending.push_str(text),
                Some((semi, SegmentType::Terminator)) => {
                    self.pending.push_str(semi);
                    let stmt = self.pending.trim().to_owned();
                    self.pending.clear();
                    return Some(stmt);
                }
            }
        }
    }
}

/// Split `sql` into its trimmed statement texts, in source order.
///
/// Statement-terminating semicolons are kept at the end of each statement.
/// Inputs containing only whitespace and comments yield no statement; a
/// trailing fragment with no terminator is yielded only if it contains
/// non-whitespace content.
///
/// ```
/// let stmts = pgsql_splitter::split("select 1; select '&'");
/// assert_eq!(stmts, vec!["select 1;".to_owned(), "select '&'".to_owned()]);
/// ```
pub fn split(sql: &str) -> Vec<String> {
    Statements::new(sql).collect()
}

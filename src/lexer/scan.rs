//! Adaptation/port of [Go scanner](http://tip.golang.org/pkg/bufio/#Scanner).

use log::debug;

use std::fmt;

/// The `(&str, SegmentType)` is the segment.
/// And the `usize` is the amount of bytes to consume.
type SplitResult<'input, SegmentType> = (Option<(&'input str, SegmentType)>, usize);

/// Split function used to segment the input.
///
/// Splitting is total: every input, malformed constructs included, yields a
/// (possibly truncated) sequence of segments rather than an error.
pub trait Splitter: Sized {
    /// Segment classification
    type SegmentType;

    /// The argument is the remaining unprocessed data.
    ///
    /// Returns the next segment (`None` for data to be skipped, like
    /// comments) and the number of bytes to consume. The amount must end on
    /// a `char` boundary of the input.
    ///
    /// The function is never called with an empty data slice.
    fn split<'input>(&mut self, data: &'input str) -> SplitResult<'input, Self::SegmentType>;
}

/// Successive calls to the `scan` method will step through the 'segments'
/// of the input, skipping the bytes between the segments.
///
/// The whole input is available up front; nothing is buffered or refilled.
/// Scanning stops unrecoverably at end of input.
pub struct Scanner<'input, S: Splitter> {
    /// The remaining unprocessed input.
    input: &'input str,
    /// The function to segment the input.
    splitter: S,
    /// current line number
    line: u64,
    /// current column number (byte offset, not char offset)
    column: usize,
}

impl<'input, S: Splitter> Scanner<'input, S> {
    /// Constructor
    pub fn new(input: &'input str, splitter: S) -> Scanner<'input, S> {
        Scanner {
            input,
            splitter,
            line: 1,
            column: 1,
        }
    }

    /// Current line number
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Current column number (byte offset, not char offset)
    pub fn column(&self) -> usize {
        self.column
    }

    /// Associated splitter
    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    /// Reset the scanner such that it behaves as if it had never been used.
    pub fn reset(&mut self, input: &'input str) {
        self.input = input;
        self.line = 1;
        self.column = 1;
    }
}

impl<'input, S: Splitter> Scanner<'input, S> {
    /// Advance the Scanner to the next segment.
    /// Return the segment as a string slice of the original input.
    /// Return `None` when the end of the input is reached.
    pub fn scan(&mut self) -> Option<(&'input str, S::SegmentType)> {
        debug!(target: "scanner", "scan(line: {}, column: {})", self.line, self.column);
        // Loop until we have a segment.
        loop {
            // See if we can get a segment with what we already have.
            if !self.input.is_empty() {
                let data = self.input;
                match self.splitter.split(data) {
                    (None, 0) => {
                        // Nothing to emit, nothing to skip
                    }
                    (None, amt) => {
                        // Ignore/skip this data
                        self.consume(amt);
                        continue;
                    }
                    (seg, amt) => {
                        self.consume(amt);
                        return seg;
                    }
                }
            }
            // We cannot generate a segment with what we are holding.
            // We are done.
            return None;
        }
    }

    /// Consume `amt` bytes of the input.
    fn consume(&mut self, amt: usize) {
        debug!(target: "scanner", "consume({})", amt);
        debug_assert!(amt <= self.input.len());
        for byte in &self.input.as_bytes()[..amt] {
            if *byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.input = &self.input[amt..];
    }
}

impl<'input, S: Splitter> fmt::Debug for Scanner<'input, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("input", &self.input)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}

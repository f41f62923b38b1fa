use pgsql_splitter::lexer::sql::{Segmenter, SegmentType};
use pgsql_splitter::lexer::Scanner;

use std::env;
use std::fs;

/// Segment specified files (and do some checks)
fn main() {
    env_logger::init();
    let args = env::args();
    for arg in args.skip(1) {
        let sql = fs::read_to_string(&arg).unwrap();
        let segmenter = Segmenter::new();
        let mut s = Scanner::new(&sql, segmenter);
        while let Some((segment, segment_type)) = s.scan() {
            match segment_type {
                SegmentType::Terminator => debug_assert_eq!(";", segment),
                SegmentType::Text => debug_assert!(!segment.is_empty()),
            }
            println!("{:?}, {:?}", segment, segment_type);
        }
        println!("{}: {} line(s)", arg, s.line());
    }
}

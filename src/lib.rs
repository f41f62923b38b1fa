//! PostgreSQL statement splitter
#![warn(missing_docs)]
#![warn(clippy::large_stack_frames)]

pub mod dialect;
pub mod lexer;

pub use lexer::sql::{split, Statements};

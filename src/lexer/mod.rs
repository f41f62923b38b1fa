//! PostgreSQL statement scanner

mod scan;
pub mod sql;

pub use scan::{Scanner, Splitter};

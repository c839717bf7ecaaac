//! integrated tests
pub mod toolkit;

mod merge;
mod taf;

//! Argument parsing and terminal output for the `whatdo` binary.

pub mod args;
pub mod print;

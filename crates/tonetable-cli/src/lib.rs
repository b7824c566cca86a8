//! Tonetable CLI library.
//!
//! File loading, command-line directive parsing and the table command used
//! by the `tonetable` binary.

pub mod commands;
pub mod input;
pub mod options;

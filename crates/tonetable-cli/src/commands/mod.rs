//! CLI command implementations

pub mod table;

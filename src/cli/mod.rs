//! Command implementations for the `mgraph` binary.

pub mod commands;

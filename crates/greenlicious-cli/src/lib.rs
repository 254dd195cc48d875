//! Greenlicious CLI library.
//!
//! Subcommand handlers and output formatting for the `greenlicious-cli`
//! binary. Handlers return rendered output so they can be tested in-process.

pub mod commands;
pub mod output;

//! auditrack CLI library
//!
//! Argument parsing, commands and output formatting for the `auditrack`
//! binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;

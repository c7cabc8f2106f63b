//! Babel CLI - command-line front end for babel-core
//!
//! Converts BIP39 seed phrases to pronounceable babel strings and back.

pub mod commands;
pub mod config;

pub use commands::{run, Cli, Commands};
pub use config::CliConfig;

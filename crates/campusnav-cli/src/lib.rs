//! Campus Compass CLI library.
//!
//! Command handlers and output formatting for the `campusnav-cli` binary.

pub mod commands;
pub mod output;

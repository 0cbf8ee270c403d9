//! External process execution.

pub mod command;

pub use command::{execute, CommandLine, CommandOptions, CommandResult};

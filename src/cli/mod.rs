//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod run;
pub mod shell;

pub use commands::{Cli, Commands, SessionLine};
pub use run::{execute, Outcome};
pub use shell::run_session;

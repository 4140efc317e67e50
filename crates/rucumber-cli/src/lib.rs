//! Library backing the `rucumber` command.
//!
//! The binary is a thin wrapper over [`cli::run`]; the modules are public so
//! the scaffolding and grammar checks can be driven from tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;
pub mod scaffold;

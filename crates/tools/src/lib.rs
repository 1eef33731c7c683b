//! bch11 Tools library

pub mod commands;
pub mod common;
pub mod config;
pub mod report;
pub mod shell;

pub use config::{OutputFormat, ShellConfig};
pub use report::DecodeReport;
pub use shell::{SessionStats, Shell};

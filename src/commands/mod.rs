//! CLI commands

pub mod init;
pub mod list;
pub mod prompt;
pub mod status;

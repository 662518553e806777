//! CLI commands

pub mod contains;
pub mod init;

//! cakews-cli library
//!
//! This module exposes the internal functionality of cakews-cli for testing purposes.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands, EngineArgs};

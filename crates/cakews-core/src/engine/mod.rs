//! Engine module: Configuration contributed by the script engine
//!
//! The script engine implicitly imports a set of namespaces and references
//! a set of assemblies into every script. These are supplied through the
//! [`EngineDefaults`] capability rather than looked up at runtime.

mod config;
mod defaults;
mod severity;

pub use config::{ConfigError, EngineConfig};
pub use defaults::{CakeEngineDefaults, EngineDefaults};
pub use severity::Severity;

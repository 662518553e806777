//! Project system module: The full discovery-to-workspace pass
//!
//! [`CakeProjectSystem::initialize`] discovers the entry scripts of a root
//! directory and projects each one into the workspace inside its own
//! failure boundary.

mod report;
mod system;

pub use report::{EntryError, EntryFailure, InitializeReport, ProjectedEntry};
pub use system::CakeProjectSystem;

#[cfg(test)]
mod tests;

//! Projector module: Script closure to workspace projection
//!
//! Builds the projects and documents for one entry script in memory and
//! registers them in a single commit, so a failing entry never leaves
//! half of its projects behind.

mod projection;

pub use projection::{CommittedProjection, Projection, ProjectionError, Projector};

#[cfg(test)]
mod tests;

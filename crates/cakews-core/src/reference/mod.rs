//! Reference module: Assembly reference resolution
//!
//! Turns the raw `#r` arguments of a script closure, together with the
//! engine's default assemblies, into a de-duplicated list of metadata
//! references for the projected compilation.

mod resolver;

pub use resolver::{ENGINE_CORE_MARKER, MetadataReference, ReferenceEntry, ReferenceResolver};

#[cfg(test)]
mod tests;

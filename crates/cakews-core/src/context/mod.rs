//! Context module: Aggregate of everything one pass discovered

mod aggregate;

pub use aggregate::CakeContext;

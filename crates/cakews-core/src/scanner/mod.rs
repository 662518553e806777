//! Scanner module: Entry script discovery
//!
//! Responsible for finding the top-level script files of a root directory.
//! Only files directly inside the root are entry points; nested scripts are
//! reached through `#load` directives.

mod walker;

pub use walker::{CAKE_EXTENSION, DiscoveryError, Scanner};

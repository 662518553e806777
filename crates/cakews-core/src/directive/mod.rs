//! Directive module: Script directive parsing and load closure
//!
//! Reads a script, recognises its `#load`, `#r`, `using`, `#addin` and
//! `#tool` directives, and follows `#load` recursively into a
//! [`ScriptContext`] describing the whole closure of one entry script.

mod context;
mod parser;
mod processor;

pub use context::{Diagnostic, ScriptContext};
pub use parser::{parse_line, Directive, LineKind, LoadTarget, ScriptLines};
pub use processor::{DirectiveProcessor, ProcessError};

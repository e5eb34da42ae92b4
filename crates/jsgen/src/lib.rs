//! Compile selector + action + options into JavaScript snippets.
//!
//! A [`Compiler`] is constructed for one target [`Library`] (jQuery,
//! MooTools or Prototype), holds the current DOM selection set by
//! [`Compiler::select`], and turns each action call into a single line of
//! JavaScript in that library's syntax. All three dialects share the same
//! option vocabulary (the [`options`] structs) and differ only in emission.
//!
//! Generated object literals always carry their keys in lexicographic order,
//! so output is deterministic regardless of how options were assembled.

mod compiler;
mod defaults;
pub mod dialect;
mod error;
pub mod options;

pub use compiler::{Compiler, Library};
pub use error::ParseLibraryError;

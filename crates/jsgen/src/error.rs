use thiserror::Error;

/// Error returned when parsing a [`crate::Library`] from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown library '{name}' (expected jquery, mootools or prototype)")]
pub struct ParseLibraryError {
    /// The name that failed to parse.
    pub name: String,
}

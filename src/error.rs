//! Error types for mdstyler library.

use thiserror::Error;

/// Result type alias for mdstyler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during analysis and style resolution.
///
/// Malformed document input is never an error: the analyzer degrades to
/// `Unknown` roles and a `Generic` document type instead. Only template
/// lookup failures and template-schema violations are fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// No template is registered under the requested name.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A style references a font family outside the known set.
    #[error("Unknown font family: {0}")]
    UnknownFontFamily(String),

    /// The template violates a structural constraint.
    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate {
        /// Name of the offending template
        template: String,
        /// Human-readable description of the violation
        reason: String,
    },

    /// Template JSON could not be deserialized.
    #[error("Template parse error: {0}")]
    TemplateParse(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

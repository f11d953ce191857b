//! CLI Error Types

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific errors with helpful messages and hints
#[derive(Debug, Error)]
pub enum CliError {
    /// Schema file missing
    #[error("schema file not found: {path}\n  Hint: pass --schema a vectors.toml path, or --title with FIELD arguments")]
    SchemaNotFound { path: String },

    /// Mutually exclusive or missing input selection
    #[error("{message}\n  Hint: use either --schema <file> or --title <phrase> FIELD...")]
    InvalidInvocation { message: String },

    /// Validation found Error-severity problems
    #[error("validation failed — fix the errors above and retry")]
    ValidationFailed,

    /// Schema file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

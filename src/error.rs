//! Error types for roscheck

use std::process::ExitCode;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RosCheckError>;

/// All errors surfaced by the checker, simulator, and artifact store.
///
/// Extraction-time problems (syntax errors, toolchain diagnostics, generic
/// extraction failures) are recorded as strings inside the `CheckReport` and
/// never reach the caller through this type; the variants here cover the
/// caller-visible failure modes plus internal plumbing.
#[derive(Debug, Error)]
pub enum RosCheckError {
    /// Input file or archive does not exist, or an archive held no supported file
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// No stored check or simulation result under the given id
    #[error("Result not found: {id}")]
    ResultNotFound { id: String },

    /// File extension maps to no supported dialect
    #[error("Unsupported dialect: {extension}")]
    UnsupportedDialect { extension: String },

    /// The in-process parser could not be set up or produced no tree
    #[error("Parse failure: {message}")]
    ParseFailure { message: String },

    /// The native toolchain subprocess could not be invoked at all.
    /// Distinct from a genuine compile diagnostic, which is report data.
    #[error("Toolchain invocation failed: {message}")]
    ToolInvocation { message: String },

    /// Unexpected failure during extraction
    #[error("Extraction failure: {message}")]
    ExtractionFailure { message: String },

    /// Frame rendering failed; fatal to the simulation call
    #[error("Render failure: {message}")]
    RenderFailure { message: String },

    /// Zip archive could not be opened or extracted
    #[error("Archive error: {message}")]
    Archive { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RosCheckError {
    /// Map the error to a process exit code for the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } | Self::ResultNotFound { .. } => ExitCode::from(2),
            Self::UnsupportedDialect { .. } => ExitCode::from(3),
            Self::ToolInvocation { .. } => ExitCode::from(4),
            _ => ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let e = RosCheckError::UnsupportedDialect {
            extension: "java".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported dialect: java");
    }
}

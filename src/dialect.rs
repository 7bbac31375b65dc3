//! Dialect detection from file extensions

use std::path::Path;

use crate::error::{Result, RosCheckError};

/// Supported source dialects
///
/// The checker recognizes exactly two conventions: rospy-style Python nodes
/// and roscpp-style C++ nodes. Files of any other extension produce an
/// empty-but-valid report rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Python,
    Cpp,
}

impl Dialect {
    /// Detect dialect from a file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| RosCheckError::UnsupportedDialect {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect dialect from an extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Ok(Self::Python),
            "cpp" => Ok(Self::Cpp),
            _ => Err(RosCheckError::UnsupportedDialect {
                extension: ext.to_string(),
            }),
        }
    }

    /// Get the canonical name of the dialect
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Cpp => "cpp",
        }
    }

    /// Get the file extensions recognized for this dialect
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Python => &["py"],
            Self::Cpp => &["cpp"],
        }
    }
}

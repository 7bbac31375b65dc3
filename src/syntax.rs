//! Syntax gates for the two dialects
//!
//! PythonLike sources get a full-language parse in process via tree-sitter.
//! CppLike sources are handed to a native toolchain through the
//! [`CppSyntaxCheck`] capability so the subprocess can be faked in tests.

use std::path::Path;
use std::process::Command;

use tree_sitter::Node;

use crate::error::{Result, RosCheckError};

/// Outcome of a syntax-only pass over one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxOutcome {
    Valid,
    /// Parse or compile diagnostics; terminal for extraction on this file
    Invalid { message: String },
}

/// Injected capability: syntax-only check of a CppLike file
///
/// One operation, returning diagnostics as data. Invocation failures (tool
/// missing, spawn error) are errors on this trait, distinct from a file that
/// genuinely fails to compile.
pub trait CppSyntaxCheck {
    fn check_syntax(&self, path: &Path) -> Result<SyntaxOutcome>;
}

/// Production toolchain: `g++ -fsyntax-only`
///
/// No timeout is applied; the call blocks until the compiler exits.
#[derive(Debug, Clone)]
pub struct NativeToolchain {
    compiler: String,
}

impl NativeToolchain {
    pub fn new(compiler: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
        }
    }
}

impl Default for NativeToolchain {
    fn default() -> Self {
        Self::new("g++")
    }
}

impl CppSyntaxCheck for NativeToolchain {
    fn check_syntax(&self, path: &Path) -> Result<SyntaxOutcome> {
        let output = Command::new(&self.compiler)
            .arg("-fsyntax-only")
            .arg(path)
            .output()
            .map_err(|e| RosCheckError::ToolInvocation {
                message: format!("{}: {}", self.compiler, e),
            })?;

        if output.status.success() {
            Ok(SyntaxOutcome::Valid)
        } else {
            Ok(SyntaxOutcome::Invalid {
                message: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            })
        }
    }
}

/// Full-language syntax check for PythonLike sources
///
/// Parses the whole file and reports the first error or missing node. The
/// parser is error-tolerant, so validity means a tree with no error nodes.
pub fn check_python_syntax(source: &str) -> Result<SyntaxOutcome> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| RosCheckError::ParseFailure {
            message: format!("Failed to set language: {:?}", e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| RosCheckError::ParseFailure {
            message: "Failed to parse file".to_string(),
        })?;

    let root = tree.root_node();
    if !root.has_error() {
        return Ok(SyntaxOutcome::Valid);
    }

    let message = match first_error_node(&root) {
        Some(node) if node.is_missing() => format!(
            "missing {} at line {}, column {}",
            node.kind(),
            node.start_position().row + 1,
            node.start_position().column
        ),
        Some(node) => format!(
            "invalid syntax at line {}, column {}",
            node.start_position().row + 1,
            node.start_position().column
        ),
        None => "invalid syntax".to_string(),
    };

    Ok(SyntaxOutcome::Invalid { message })
}

/// Depth-first search for the first error or missing node
fn first_error_node<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(&child) {
            return Some(found);
        }
    }
    None
}

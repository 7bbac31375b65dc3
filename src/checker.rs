//! Check orchestration
//!
//! Dispatches a file to the dialect-appropriate syntax gate, extraction, and
//! safety pipeline, then always runs the package-structure check against the
//! containing directory. All extraction-time failures are folded into the
//! report; nothing here is fatal to the request.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::dialect::Dialect;
use crate::error::RosCheckError;
use crate::extract;
use crate::safety;
use crate::schema::{CheckReport, JointState};
use crate::structure;
use crate::syntax::{self, CppSyntaxCheck, NativeToolchain, SyntaxOutcome};

/// One checked file: the consolidated report plus the harvested joint state
///
/// The joint state rides alongside rather than inside the report; it feeds
/// the simulator and is not persisted with the check result.
#[derive(Debug, Clone, Default)]
pub struct CheckedFile {
    pub report: CheckReport,
    pub joints: JointState,
}

/// Orchestrates one check per file, with an injected CppLike toolchain
pub struct CodeChecker<C = NativeToolchain> {
    cpp_syntax: C,
}

impl CodeChecker<NativeToolchain> {
    /// Checker with the production `g++ -fsyntax-only` toolchain
    pub fn new() -> Self {
        Self::with_toolchain(NativeToolchain::default())
    }
}

impl Default for CodeChecker<NativeToolchain> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CppSyntaxCheck> CodeChecker<C> {
    /// Checker with a caller-supplied toolchain (faked in tests)
    pub fn with_toolchain(cpp_syntax: C) -> Self {
        Self { cpp_syntax }
    }

    /// Check one file and return the accumulated report
    ///
    /// Unsupported extensions skip extraction entirely and yield an
    /// empty-but-valid report. The structure check always runs, even after a
    /// syntax error aborted extraction.
    pub fn check_file(&self, path: &Path) -> CheckedFile {
        let mut report = CheckReport::default();

        let joints = match Dialect::from_path(path) {
            Ok(dialect) => self.check_source(path, dialect, &mut report),
            Err(RosCheckError::UnsupportedDialect { extension }) => {
                debug!(%extension, "no dialect for extension, skipping extraction");
                JointState::default()
            }
            Err(e) => {
                warn!(error = %e, "dialect detection failed");
                JointState::default()
            }
        };

        let package_dir = path.parent().unwrap_or_else(|| Path::new("."));
        structure::check_package_structure(package_dir, &mut report.warnings);

        CheckedFile { report, joints }
    }

    /// Syntax gate, extraction, and safety for one supported-dialect file
    fn check_source(&self, path: &Path, dialect: Dialect, report: &mut CheckReport) -> JointState {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                let failure = RosCheckError::ExtractionFailure {
                    message: e.to_string(),
                };
                report
                    .errors
                    .push(format!("Error checking {} file: {}", dialect.name(), failure));
                return JointState::default();
            }
        };

        let outcome = match dialect {
            Dialect::Python => syntax::check_python_syntax(&source),
            Dialect::Cpp => self.cpp_syntax.check_syntax(path),
        };

        match outcome {
            Ok(SyntaxOutcome::Valid) => {}
            Ok(SyntaxOutcome::Invalid { message }) => {
                let error = match dialect {
                    Dialect::Python => format!("Syntax error: {}", message),
                    Dialect::Cpp => format!("C++ syntax error: {}", message),
                };
                report.errors.push(error);
                return JointState::default();
            }
            Err(e) => {
                // Tool unavailable or parser setup failure: surfaced
                // distinctly from a genuine syntax diagnostic
                report
                    .errors
                    .push(format!("Error checking {} file: {}", dialect.name(), e));
                return JointState::default();
            }
        }

        let extraction = extract::extract(&source, dialect);
        report.ros_elements = extraction.elements;
        safety::check_safety(
            &source,
            dialect,
            &extraction.assignments,
            &mut report.safety_issues,
        );

        extraction.joints
    }
}

//! Package structure validation
//!
//! Advisory only: missing marker files produce warnings, never errors, and
//! never fail the overall check.

use std::path::Path;

use tracing::debug;

/// Package manifest marker file
pub const PACKAGE_MANIFEST: &str = "package.xml";
/// Native build descriptor
pub const CMAKE_BUILD: &str = "CMakeLists.txt";
/// Python build descriptor
pub const PYTHON_BUILD: &str = "setup.py";

/// Check a directory for the expected packaging marker files
///
/// One warning if the manifest is absent; a second if neither build
/// descriptor is present.
pub fn check_package_structure(package_dir: &Path, warnings: &mut Vec<String>) {
    debug!(dir = %package_dir.display(), "checking package structure");

    if !package_dir.join(PACKAGE_MANIFEST).exists() {
        warnings.push(format!(
            "{} not found. This might not be a valid ROS package.",
            PACKAGE_MANIFEST
        ));
    }

    if !package_dir.join(CMAKE_BUILD).exists() && !package_dir.join(PYTHON_BUILD).exists() {
        warnings.push(format!(
            "Neither {} nor {} found. This might not be a valid ROS package.",
            CMAKE_BUILD, PYTHON_BUILD
        ));
    }
}

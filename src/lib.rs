//! roscheck: static checker and 2-D kinematic simulator for ROS node sources
//!
//! This library scans robotics control sources in two dialects (rospy-style
//! Python, roscpp-style C++) for framework idioms (node initialization,
//! publishers, subscribers, services), packaging conventions, and simple
//! safety heuristics, and can run a toy two-link kinematic simulation seeded
//! from joint values harvested out of the same source text.
//!
//! All source-text matching is pattern-based and deliberately heuristic; the
//! only full-language pass is the PythonLike syntax gate (tree-sitter) and
//! the CppLike native-toolchain syntax check.
//!
//! # Example
//!
//! ```ignore
//! use roscheck::{CodeChecker, run_simulation};
//! use std::path::Path;
//!
//! let checked = CodeChecker::new().check_file(Path::new("arm_node.py"));
//! println!("{} publishers", checked.report.ros_elements.publishers.len());
//!
//! let sim = run_simulation(&checked.joints)?;
//! println!("reached target: {}", sim.success);
//! ```

pub mod checker;
pub mod cli;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod patterns;
pub mod render;
pub mod report;
pub mod safety;
pub mod schema;
pub mod sim;
pub mod store;
pub mod structure;
pub mod syntax;
pub mod workspace;

// Re-export commonly used types
pub use checker::{CheckedFile, CodeChecker};
pub use cli::{Cli, Command, OutputFormat};
pub use dialect::Dialect;
pub use error::{Result, RosCheckError};
pub use extract::{extract, harvest_joint_values, Extraction};
pub use report::{build_bundle, render_json_report, render_text_report};
pub use schema::{
    CheckReport, JointState, Publisher, ResultBundle, RosElements, Service, SimulationReport,
};
pub use sim::run_simulation;
pub use store::ArtifactStore;
pub use syntax::{CppSyntaxCheck, NativeToolchain, SyntaxOutcome};
pub use workspace::{stage_input, StagedInput};

//! Report data model
//!
//! Serializable types shared by the checker, the simulator, the report
//! renderers, and the artifact store. Field names and nesting match the
//! persisted JSON shape exactly; ordering of every list is source order.

use serde::{Deserialize, Serialize};

use crate::patterns::JOINT_NAMES;

/// Consolidated result of checking one source file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Terminal extraction failures (syntax errors, toolchain problems)
    pub errors: Vec<String>,
    /// Advisory findings, including package-structure warnings
    pub warnings: Vec<String>,
    /// Communication endpoints and the init flag found in source text
    pub ros_elements: RosElements,
    /// Safety heuristic findings
    pub safety_issues: Vec<String>,
}

/// Structured summary of framework idioms found in source text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosElements {
    pub publishers: Vec<Publisher>,
    pub subscribers: Vec<String>,
    pub services: Vec<Service>,
    pub init_node: bool,
}

/// One publisher declaration: variable bound to a topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    pub variable: String,
    pub topic: String,
}

/// One service declaration: variable bound to a service name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub variable: String,
    pub service: String,
}

/// Angles in radians for the six fixed joints
///
/// Joints with no textual assignment keep the default 0.0. Serializes as an
/// object keyed `joint1`..`joint6`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointState {
    pub joint1: f64,
    pub joint2: f64,
    pub joint3: f64,
    pub joint4: f64,
    pub joint5: f64,
    pub joint6: f64,
}

impl Default for JointState {
    fn default() -> Self {
        Self {
            joint1: 0.0,
            joint2: 0.0,
            joint3: 0.0,
            joint4: 0.0,
            joint5: 0.0,
            joint6: 0.0,
        }
    }
}

impl JointState {
    /// Build a state from harvested (joint, angle) assignments over defaults
    pub fn from_assignments(assignments: &[(&str, f64)]) -> Self {
        let mut state = Self::default();
        for (joint, angle) in assignments {
            state.set(joint, *angle);
        }
        state
    }

    /// Look up a joint angle by identifier
    pub fn get(&self, joint: &str) -> Option<f64> {
        match joint {
            "joint1" => Some(self.joint1),
            "joint2" => Some(self.joint2),
            "joint3" => Some(self.joint3),
            "joint4" => Some(self.joint4),
            "joint5" => Some(self.joint5),
            "joint6" => Some(self.joint6),
            _ => None,
        }
    }

    /// Set a joint angle by identifier; unknown identifiers are ignored
    pub fn set(&mut self, joint: &str, angle: f64) {
        match joint {
            "joint1" => self.joint1 = angle,
            "joint2" => self.joint2 = angle,
            "joint3" => self.joint3 = angle,
            "joint4" => self.joint4 = angle,
            "joint5" => self.joint5 = angle,
            "joint6" => self.joint6 = angle,
            _ => {}
        }
    }

    /// Iterate (identifier, angle) pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        JOINT_NAMES
            .iter()
            .map(move |joint| (*joint, self.get(joint).unwrap_or(0.0)))
    }
}

/// Result of one simulation run
///
/// Created fresh per invocation; never merged with prior simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Whether the cube reached the target
    pub success: bool,
    /// Rendered frames as base64-encoded PNG blobs; exactly one per run
    pub frames: Vec<String>,
    /// Final joint angles used for the run
    pub joint_positions: JointState,
    /// Computed cube position [x, y, z]
    pub cube_position: [f64; 3],
    /// Fixed target position [x, y, z]
    pub target_position: [f64; 3],
}

/// Persisted per-request bundle: check result plus optional simulation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub timestamp: String,
    pub check_report: CheckReport,
    pub simulation_report: Option<SimulationReport>,
}

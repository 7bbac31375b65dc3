//! Simplified kinematic simulation
//!
//! Deliberately approximate: only joint1 and joint2 influence the computed
//! position; the other four joints are tracked but inert. Downstream
//! consumers rely on the exact formulas here for reproducible output, so do
//! not "fix" the kinematics.

use tracing::debug;

use crate::error::Result;
use crate::render;
use crate::schema::{JointState, SimulationReport};

/// Cube position before any joint influence
pub const INITIAL_CUBE_POSITION: [f64; 3] = [0.5, 0.5, 0.0];
/// Fixed target the arm reaches toward
pub const TARGET_POSITION: [f64; 3] = [0.7, 0.3, 0.0];
/// Success when the 2-D cube-to-target distance is strictly below this
pub const SUCCESS_RADIUS: f64 = 0.1;
/// Length of each of the two arm segments
pub const ARM_LINK_LENGTH: f64 = 0.3;

/// Run one simulation from the given joint state
///
/// Computes the cube position, the success flag, and renders exactly one
/// frame. A rendering failure is fatal: no partial report is produced.
pub fn run_simulation(joints: &JointState) -> Result<SimulationReport> {
    let mut cube_position = INITIAL_CUBE_POSITION;
    cube_position[0] = 0.5 + 0.2 * joints.joint1.sin();
    cube_position[1] = 0.5 + 0.2 * joints.joint2.sin();

    let dx = cube_position[0] - TARGET_POSITION[0];
    let dy = cube_position[1] - TARGET_POSITION[1];
    let distance = (dx * dx + dy * dy).sqrt();
    let success = distance < SUCCESS_RADIUS;

    debug!(distance, success, "simulation step complete");

    let frame = render::render_frame(joints, cube_position, TARGET_POSITION)?;

    Ok(SimulationReport {
        success,
        frames: vec![frame],
        joint_positions: joints.clone(),
        cube_position,
        target_position: TARGET_POSITION,
    })
}

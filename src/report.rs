//! Report rendering
//!
//! Two renderings per result: a human-readable text report and a
//! JSON-serializable bundle. Both always include the check section; the
//! simulation section appears only when a simulation report is supplied.

use chrono::Local;

use crate::error::Result;
use crate::schema::{CheckReport, ResultBundle, SimulationReport};

/// Render the human-readable text report
pub fn render_text_report(check: &CheckReport, sim: Option<&SimulationReport>) -> String {
    let mut lines: Vec<String> = Vec::new();
    let rule = "=".repeat(50);

    lines.push(rule.clone());
    lines.push("ROS Code Checker Report".to_string());
    lines.push(format!(
        "Generated on: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(rule);

    if check.errors.is_empty() {
        lines.push("\nNo syntax errors found.".to_string());
    } else {
        lines.push("\nERRORS:".to_string());
        for error in &check.errors {
            lines.push(format!("  - {}", error));
        }
    }

    if !check.warnings.is_empty() {
        lines.push("\nWARNINGS:".to_string());
        for warning in &check.warnings {
            lines.push(format!("  - {}", warning));
        }
    }

    lines.push("\nROS Elements Found:".to_string());
    lines.push(format!(
        "  - init_node: {}",
        if check.ros_elements.init_node { "Yes" } else { "No" }
    ));

    if !check.ros_elements.publishers.is_empty() {
        lines.push(format!(
            "  - Publishers: {}",
            check.ros_elements.publishers.len()
        ));
        for publisher in &check.ros_elements.publishers {
            lines.push(format!("    * {} -> {}", publisher.variable, publisher.topic));
        }
    }

    if !check.ros_elements.subscribers.is_empty() {
        lines.push(format!(
            "  - Subscribers: {}",
            check.ros_elements.subscribers.len()
        ));
        for topic in &check.ros_elements.subscribers {
            lines.push(format!("    * {}", topic));
        }
    }

    if !check.ros_elements.services.is_empty() {
        lines.push(format!(
            "  - Services: {}",
            check.ros_elements.services.len()
        ));
        for service in &check.ros_elements.services {
            lines.push(format!("    * {} -> {}", service.variable, service.service));
        }
    }

    if !check.safety_issues.is_empty() {
        lines.push("\nSafety Issues:".to_string());
        for issue in &check.safety_issues {
            lines.push(format!("  - {}", issue));
        }
    }

    if let Some(sim) = sim {
        lines.push("\nSimulation Results:".to_string());
        lines.push(format!(
            "  - Success: {}",
            if sim.success { "Yes" } else { "No" }
        ));
        lines.push("  - Final Joint Positions:".to_string());
        for (joint, angle) in sim.joint_positions.iter() {
            lines.push(format!("    * {}: {:.2} rad", joint, angle));
        }
        lines.push(format!(
            "  - Final Cube Position: [{:.2}, {:.2}, {:.2}]",
            sim.cube_position[0], sim.cube_position[1], sim.cube_position[2]
        ));
        lines.push(format!(
            "  - Target Position: [{:.2}, {:.2}, {:.2}]",
            sim.target_position[0], sim.target_position[1], sim.target_position[2]
        ));
    }

    lines.join("\n")
}

/// Build the persisted JSON bundle
pub fn build_bundle(check: &CheckReport, sim: Option<&SimulationReport>) -> ResultBundle {
    ResultBundle {
        timestamp: Local::now().to_rfc3339(),
        check_report: check.clone(),
        simulation_report: sim.cloned(),
    }
}

/// Render the bundle as pretty-printed JSON
pub fn render_json_report(check: &CheckReport, sim: Option<&SimulationReport>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&build_bundle(check, sim))?)
}

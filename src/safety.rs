//! Safety heuristics over source text
//!
//! Two independent, non-exclusive checks. Both are textual best-effort
//! heuristics, not sound analyses: the loop check cannot see rate limiting
//! that precedes the loop header, and credits tokens that appear anywhere
//! after it.

use std::f64::consts::PI;

use crate::dialect::Dialect;
use crate::patterns::patterns;

/// Append safety findings for one source file
///
/// `assignments` must be the joint values harvested during extraction; the
/// range check reuses them rather than re-scanning the text.
pub fn check_safety(
    source: &str,
    dialect: Dialect,
    assignments: &[(&'static str, f64)],
    issues: &mut Vec<String>,
) {
    check_unbounded_loop(source, dialect, issues);
    check_joint_ranges(assignments, issues);
}

/// Heuristic: an always-true loop header with no rate-limiting call after it
fn check_unbounded_loop(source: &str, dialect: Dialect, issues: &mut Vec<String>) {
    let table = patterns(dialect);
    if let Some(found) = table.unbounded_loop.find(source) {
        if !table.rate_limit.is_match(&source[found.start()..]) {
            issues.push("Potential infinite loop without rate limiting detected".to_string());
        }
    }
}

/// Every harvested joint angle with magnitude beyond pi gets one warning
fn check_joint_ranges(assignments: &[(&'static str, f64)], issues: &mut Vec<String>) {
    for (joint, angle) in assignments {
        if angle.abs() > PI {
            issues.push(format!(
                "Joint value {} for {} might be out of safe range",
                angle, joint
            ));
        }
    }
}

//! Tagged pattern tables for dialect-specific extraction
//!
//! All source-text matching the checker performs is declared here, one table
//! per dialect, so the heuristic surface stays auditable in one place. The
//! extractor and the safety heuristics both read these tables; neither owns
//! private patterns of its own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dialect::Dialect;

/// The six joint identifiers harvested from source text, in report order
pub const JOINT_NAMES: [&str; 6] = [
    "joint1", "joint2", "joint3", "joint4", "joint5", "joint6",
];

/// Per-dialect pattern table
///
/// `init_call` is a literal token searched as a substring; the rest are
/// compiled regexes. `publisher` and `service` capture (variable, name)
/// pairs; `subscriber` captures only the topic.
pub struct DialectPatterns {
    /// Literal node-initialization token
    pub init_call: &'static str,
    /// Captures (variable, topic)
    pub publisher: Regex,
    /// Captures (topic)
    pub subscriber: Regex,
    /// Captures (variable, service)
    pub service: Regex,
    /// Always-true loop header
    pub unbounded_loop: Regex,
    /// Rate-limiting tokens that quiet the loop heuristic
    pub rate_limit: Regex,
}

static PYTHON_PATTERNS: Lazy<DialectPatterns> = Lazy::new(|| DialectPatterns {
    init_call: "rospy.init_node",
    publisher: Regex::new(r#"(\w+)\s*=\s*rospy\.Publisher\(['"]([^'"]+)['"]"#)
        .expect("python publisher pattern"),
    subscriber: Regex::new(r#"rospy\.Subscriber\(['"]([^'"]+)['"]"#)
        .expect("python subscriber pattern"),
    service: Regex::new(r#"(\w+)\s*=\s*rospy\.Service\(['"]([^'"]+)['"]"#)
        .expect("python service pattern"),
    unbounded_loop: Regex::new(r"while\s+True\s*:").expect("python loop pattern"),
    rate_limit: Regex::new(r"rospy\.sleep|time\.sleep|rospy\.Rate")
        .expect("python rate-limit pattern"),
});

static CPP_PATTERNS: Lazy<DialectPatterns> = Lazy::new(|| DialectPatterns {
    init_call: "ros::init",
    publisher: Regex::new(r#"ros::Publisher\s+(\w+)\s*=\s*\w+\.advertise<[^>]+>\(['"]([^'"]+)['"]"#)
        .expect("cpp publisher pattern"),
    subscriber: Regex::new(r#"\w+\.subscribe<[^>]+>\(['"]([^'"]+)['"]"#)
        .expect("cpp subscriber pattern"),
    service: Regex::new(
        r#"ros::ServiceServer\s+(\w+)\s*=\s*\w+\.advertiseService\(['"]([^'"]+)['"]"#,
    )
    .expect("cpp service pattern"),
    unbounded_loop: Regex::new(r"while\s*\(\s*true\s*\)").expect("cpp loop pattern"),
    rate_limit: Regex::new(r"ros::Duration|ros::Rate").expect("cpp rate-limit pattern"),
});

/// One compiled assignment pattern per joint identifier
///
/// Matches `<joint><optional "value"/"values"> = <signed-decimal>`
/// case-insensitively, e.g. `joint1_value = 0.5`, `Joint2 values= -1.2`,
/// `joint3 = 3.0`. The single capture group is the numeric text.
static JOINT_ASSIGNMENTS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    JOINT_NAMES
        .iter()
        .map(|joint| {
            let pattern = format!(r"(?i){joint}[_\s]*(?:values?)?\s*=\s*([-\d.]+)");
            (*joint, Regex::new(&pattern).expect("joint assignment pattern"))
        })
        .collect()
});

/// Get the pattern table for a dialect
pub fn patterns(dialect: Dialect) -> &'static DialectPatterns {
    match dialect {
        Dialect::Python => &PYTHON_PATTERNS,
        Dialect::Cpp => &CPP_PATTERNS,
    }
}

/// Get the per-joint assignment patterns
pub fn joint_assignments() -> &'static [(&'static str, Regex)] {
    &JOINT_ASSIGNMENTS
}

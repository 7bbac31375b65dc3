//! Pattern-based extraction of framework idioms and joint values
//!
//! Everything here is textual: matches are appended in source order, never
//! deduplicated, and re-running on unchanged text yields identical output.

use tracing::debug;

use crate::dialect::Dialect;
use crate::patterns::{joint_assignments, patterns};
use crate::schema::{JointState, Publisher, RosElements, Service};

/// Everything the extractor pulls out of one source file
///
/// `assignments` lists only the joints that actually had a textual
/// assignment (last occurrence per joint); `joints` is the same data applied
/// over all-zero defaults. The safety heuristics consume `assignments` and
/// the simulator consumes `joints`, both from this single harvest, so the
/// two can never disagree on which value a joint holds.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub elements: RosElements,
    pub assignments: Vec<(&'static str, f64)>,
    pub joints: JointState,
}

/// Run the dialect's pattern table over source text
pub fn extract(source: &str, dialect: Dialect) -> Extraction {
    let table = patterns(dialect);

    let mut elements = RosElements {
        init_node: source.contains(table.init_call),
        ..Default::default()
    };

    for caps in table.publisher.captures_iter(source) {
        elements.publishers.push(Publisher {
            variable: caps[1].to_string(),
            topic: caps[2].to_string(),
        });
    }

    for caps in table.subscriber.captures_iter(source) {
        elements.subscribers.push(caps[1].to_string());
    }

    for caps in table.service.captures_iter(source) {
        elements.services.push(Service {
            variable: caps[1].to_string(),
            service: caps[2].to_string(),
        });
    }

    let assignments = harvest_joint_values(source);
    let joints = JointState::from_assignments(&assignments);

    debug!(
        dialect = dialect.name(),
        publishers = elements.publishers.len(),
        subscribers = elements.subscribers.len(),
        services = elements.services.len(),
        joints_assigned = assignments.len(),
        "extraction complete"
    );

    Extraction {
        elements,
        assignments,
        joints,
    }
}

/// Harvest joint-value assignments from source text
///
/// For each joint identifier, scans case-insensitively for
/// `<joint><optional "value"/"values"> = <signed-decimal>`; the last
/// occurrence in the text wins. Unparseable numeric text is skipped, as are
/// joints with no match. The returned pairs follow `JOINT_NAMES` order.
pub fn harvest_joint_values(source: &str) -> Vec<(&'static str, f64)> {
    let mut found = Vec::new();
    for (joint, pattern) in joint_assignments() {
        let last = pattern
            .captures_iter(source)
            .filter_map(|caps| caps[1].parse::<f64>().ok())
            .last();
        if let Some(angle) = last {
            found.push((*joint, angle));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYTHON_NODE: &str = r#"
import rospy
from std_msgs.msg import String

def talker():
    rospy.init_node('talker', anonymous=True)
    pub = rospy.Publisher('/chatter', String, queue_size=10)
    diag = rospy.Publisher('/diagnostics', String, queue_size=1)
    rospy.Subscriber('/commands', String, callback)
    srv = rospy.Service('/reset', Empty, handle_reset)
    joint1_value = 0.1
    joint1_value = 1.2
    joint2_value = -0.4
"#;

    const CPP_NODE: &str = r#"
#include "ros/ros.h"

int main(int argc, char **argv) {
    ros::init(argc, argv, "talker");
    ros::NodeHandle n;
    ros::Publisher chatter_pub = n.advertise<std_msgs::String>("chatter", 1000);
    n.subscribe<std_msgs::String>("commands", 10, callback);
    ros::ServiceServer service = n.advertiseService("reset", handle_reset);
    return 0;
}
"#;

    #[test]
    fn test_python_init_node_detected() {
        let out = extract(PYTHON_NODE, Dialect::Python);
        assert!(out.elements.init_node);

        let out = extract("print('no ros here')\n", Dialect::Python);
        assert!(!out.elements.init_node);
    }

    #[test]
    fn test_python_endpoints_in_source_order() {
        let out = extract(PYTHON_NODE, Dialect::Python);
        assert_eq!(out.elements.publishers.len(), 2);
        assert_eq!(out.elements.publishers[0].variable, "pub");
        assert_eq!(out.elements.publishers[0].topic, "/chatter");
        assert_eq!(out.elements.publishers[1].variable, "diag");
        assert_eq!(out.elements.subscribers, vec!["/commands".to_string()]);
        assert_eq!(out.elements.services.len(), 1);
        assert_eq!(out.elements.services[0].service, "/reset");
    }

    #[test]
    fn test_cpp_endpoints() {
        let out = extract(CPP_NODE, Dialect::Cpp);
        assert!(out.elements.init_node);
        assert_eq!(out.elements.publishers.len(), 1);
        assert_eq!(out.elements.publishers[0].variable, "chatter_pub");
        assert_eq!(out.elements.publishers[0].topic, "chatter");
        assert_eq!(out.elements.subscribers, vec!["commands".to_string()]);
        assert_eq!(out.elements.services[0].variable, "service");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let source = "a = rospy.Publisher('/t', M)\nb = rospy.Publisher('/t', M)\n";
        let out = extract(source, Dialect::Python);
        assert_eq!(out.elements.publishers.len(), 2);
        assert_eq!(out.elements.publishers[0].topic, "/t");
        assert_eq!(out.elements.publishers[1].topic, "/t");
    }

    #[test]
    fn test_last_assignment_wins() {
        let out = extract(PYTHON_NODE, Dialect::Python);
        assert_eq!(out.joints.joint1, 1.2);
        assert_eq!(out.joints.joint2, -0.4);
        assert_eq!(out.joints.joint3, 0.0);
    }

    #[test]
    fn test_harvest_skips_unparseable_values() {
        let assignments = harvest_joint_values("joint1_value = 1.2.3\n");
        assert!(assignments.is_empty());

        // A later unparseable match does not shadow an earlier good one
        let assignments = harvest_joint_values("joint1_value = 0.5\njoint1_value = 1.2.3\n");
        assert_eq!(assignments, vec![("joint1", 0.5)]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract(PYTHON_NODE, Dialect::Python);
        let second = extract(PYTHON_NODE, Dialect::Python);
        assert_eq!(first.elements, second.elements);
        assert_eq!(first.joints, second.joints);
    }

    #[test]
    fn test_no_matches_yield_empty_lists() {
        let out = extract("x = 1\n", Dialect::Python);
        assert!(out.elements.publishers.is_empty());
        assert!(out.elements.subscribers.is_empty());
        assert!(out.elements.services.is_empty());
        assert!(!out.elements.init_node);
        assert!(out.assignments.is_empty());
    }
}

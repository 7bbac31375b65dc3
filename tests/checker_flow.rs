//! End-to-end checker flow tests
//!
//! Exercises staging, checking, report rendering, and the artifact store
//! together, the way the CLI drives them. The CppLike toolchain is faked so
//! no real compiler is required.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use roscheck::{
    build_bundle, render_text_report, stage_input, ArtifactStore, CodeChecker, CppSyntaxCheck,
    Result, SyntaxOutcome,
};

struct AlwaysValidToolchain;

impl CppSyntaxCheck for AlwaysValidToolchain {
    fn check_syntax(&self, _path: &Path) -> Result<SyntaxOutcome> {
        Ok(SyntaxOutcome::Valid)
    }
}

const ARM_NODE: &str = r#"
import rospy
from sensor_msgs.msg import JointState

def control():
    rospy.init_node('arm_control')
    pub = rospy.Publisher('/arm/command', JointState, queue_size=10)
    rospy.Subscriber('/arm/state', JointState, on_state)
    joint1_value = 0.3
    joint2_value = 3.5
    while True:
        pub.publish(make_command())
"#;

fn write_package(dir: &TempDir, with_markers: bool) -> std::path::PathBuf {
    let path = dir.path().join("arm_node.py");
    fs::write(&path, ARM_NODE).unwrap();
    if with_markers {
        fs::write(dir.path().join("package.xml"), "<package/>").unwrap();
        fs::write(dir.path().join("CMakeLists.txt"), "").unwrap();
    }
    path
}

#[test]
fn test_check_and_persist_round_trip() {
    let package = TempDir::new().unwrap();
    let path = write_package(&package, true);

    let checked = CodeChecker::new().check_file(&path);
    assert!(checked.report.errors.is_empty());
    assert!(checked.report.warnings.is_empty());
    assert!(checked.report.ros_elements.init_node);
    assert_eq!(checked.report.ros_elements.publishers.len(), 1);
    assert_eq!(checked.report.ros_elements.subscribers.len(), 1);

    // Unbounded loop plus the 3.5 rad joint
    assert_eq!(checked.report.safety_issues.len(), 2);
    assert_eq!(checked.joints.joint2, 3.5);

    let data = TempDir::new().unwrap();
    let store = ArtifactStore::new(data.path()).unwrap();
    let id = ArtifactStore::new_result_id();
    let text = render_text_report(&checked.report, None);
    store
        .save_check(&id, &build_bundle(&checked.report, None), &text)
        .unwrap();

    let loaded = store.load_check(&id).unwrap();
    assert_eq!(loaded.check_report, checked.report);
    assert!(store.load_text(&id, false).unwrap().contains("init_node: Yes"));
}

#[test]
fn test_syntax_error_still_reports_structure() {
    let package = TempDir::new().unwrap();
    let path = package.path().join("broken.py");
    fs::write(&path, "def broken(:\n    pass\n").unwrap();

    let checked = CodeChecker::new().check_file(&path);
    assert_eq!(checked.report.errors.len(), 1);
    assert!(checked.report.errors[0].starts_with("Syntax error:"));
    assert_eq!(checked.report.ros_elements, Default::default());
    // Structure warnings survive the short-circuit
    assert_eq!(checked.report.warnings.len(), 2);
}

#[test]
fn test_zip_upload_through_checker() {
    use std::io::Write as _;
    use zip::write::SimpleFileOptions;

    let dir = TempDir::new().unwrap();
    let archive_path = dir.path().join("upload.zip");
    let mut writer = zip::ZipWriter::new(fs::File::create(&archive_path).unwrap());
    writer
        .start_file("pkg/arm_node.py", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(ARM_NODE.as_bytes()).unwrap();
    writer
        .start_file("pkg/package.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<package/>").unwrap();
    writer.finish().unwrap();

    let staged = stage_input(&archive_path).unwrap();
    let checked = CodeChecker::new().check_file(&staged.source_path);
    assert!(checked.report.ros_elements.init_node);
    // package.xml was in the archive; only the build-descriptor warning remains
    assert_eq!(checked.report.warnings.len(), 1);
    assert!(checked.report.warnings[0].contains("CMakeLists.txt"));
}

#[test]
fn test_cpp_flow_with_injected_toolchain() {
    let package = TempDir::new().unwrap();
    let path = package.path().join("talker.cpp");
    fs::write(
        &path,
        concat!(
            "#include \"ros/ros.h\"\n",
            "int main(int argc, char **argv) {\n",
            "  ros::init(argc, argv, \"talker\");\n",
            "  ros::NodeHandle n;\n",
            "  ros::Publisher p = n.advertise<std_msgs::String>(\"chatter\", 10);\n",
            "  while (true) { p.publish(msg); }\n",
            "}\n",
        ),
    )
    .unwrap();

    let checker = CodeChecker::with_toolchain(AlwaysValidToolchain);
    let checked = checker.check_file(&path);
    assert!(checked.report.errors.is_empty());
    assert!(checked.report.ros_elements.init_node);
    assert_eq!(checked.report.ros_elements.publishers.len(), 1);
    assert_eq!(checked.report.ros_elements.publishers[0].topic, "chatter");
    assert_eq!(checked.report.safety_issues.len(), 1);
}

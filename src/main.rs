//! roscheck CLI entry point

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roscheck::{
    build_bundle, harvest_joint_values, render_text_report, run_simulation, stage_input,
    ArtifactStore, Cli, CodeChecker, Command, JointState, OutputFormat, Result,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> Result<String> {
    let cli = Cli::parse();
    let store = ArtifactStore::new(&cli.data_dir)?;

    match &cli.command {
        Command::Check { file } => run_check(&cli, &store, file),
        Command::Simulate { result_id, source } => {
            run_simulate(&cli, &store, result_id, source.as_deref())
        }
        Command::Report {
            result_id,
            simulation,
        } => store.load_text(result_id, *simulation),
    }
}

fn run_check(cli: &Cli, store: &ArtifactStore, file: &Path) -> Result<String> {
    let staged = stage_input(file)?;

    if cli.verbose {
        eprintln!("Checking {}", staged.source_path.display());
    }

    let checked = CodeChecker::new().check_file(&staged.source_path);
    let text_report = render_text_report(&checked.report, None);
    let bundle = build_bundle(&checked.report, None);

    let result_id = ArtifactStore::new_result_id();
    store.save_check(&result_id, &bundle, &text_report)?;

    if cli.verbose {
        eprintln!(
            "Found: init_node={}, publishers={}, subscribers={}, services={}, safety_issues={}",
            checked.report.ros_elements.init_node,
            checked.report.ros_elements.publishers.len(),
            checked.report.ros_elements.subscribers.len(),
            checked.report.ros_elements.services.len(),
            checked.report.safety_issues.len()
        );
    }

    match cli.format {
        OutputFormat::Text => Ok(format!("{}\n\nResult ID: {}", text_report, result_id)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "result_id": result_id,
            "check_report": checked.report,
            "text_report": text_report,
        }))?),
    }
}

fn run_simulate(
    cli: &Cli,
    store: &ArtifactStore,
    result_id: &str,
    source: Option<&Path>,
) -> Result<String> {
    let bundle = store.load_check(result_id)?;

    // The stored check bundle carries no joint values; without a source file
    // to re-harvest from, the simulation runs from all-zero defaults.
    let joints = match source {
        Some(path) if !path.exists() => {
            return Err(roscheck::RosCheckError::FileNotFound {
                path: path.display().to_string(),
            })
        }
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            JointState::from_assignments(&harvest_joint_values(&content))
        }
        None => JointState::default(),
    };

    if cli.verbose {
        eprintln!("Simulating result {} from {:?}", result_id, joints);
    }

    let sim_report = run_simulation(&joints)?;
    let text_report = render_text_report(&bundle.check_report, Some(&sim_report));
    let sim_bundle = build_bundle(&bundle.check_report, Some(&sim_report));
    store.save_simulation(result_id, &sim_bundle, &text_report)?;

    match cli.format {
        OutputFormat::Text => Ok(text_report),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "success": true,
            "sim_report": sim_report,
            "text_report": text_report,
        }))?),
    }
}

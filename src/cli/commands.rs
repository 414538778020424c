//! Command implementations for the mesh classifier CLI
//!
//! This module contains the command execution logic: logging setup,
//! configuration assembly, running the classifier, and emitting the
//! final report.

use crate::app::services::node_classifier::{ClassificationStats, NodeClassifier, report};
use crate::cli::args::{Args, ClassifyArgs, Commands, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use tracing::{debug, info};

/// Main command runner for the mesh classifier
///
/// Orchestrates the whole run:
/// 1. Set up logging
/// 2. Validate arguments and assemble the configuration
/// 3. Run the classifier over the node export
/// 4. Print the classified collection to stdout
pub fn run(args: Args) -> Result<ClassificationStats> {
    let Commands::Classify(cmd) = args.get_command();

    setup_logging(&cmd)?;

    info!("Starting mesh classifier");
    debug!("Command line arguments: {:?}", cmd);

    cmd.validate()?;

    let config = Config::default()
        .with_input_path(cmd.get_input_path())
        .with_skip_header(cmd.skip_header)
        .with_grouping(cmd.get_grouping());
    config.validate()?;
    debug!("Resolved configuration: {:?}", config);

    let grouping = config.grouping;
    let classifier = NodeClassifier::new(config);
    let output = classifier.run()?;

    let rendered = match cmd.output_format {
        OutputFormat::Human => report::render_human(&output, grouping),
        OutputFormat::Json => report::render_json(&output, grouping)?,
        OutputFormat::Csv => report::render_csv(&output, grouping)?,
        OutputFormat::Geojson => report::render_geojson(&output, grouping)?,
    };

    // The collection is the program's output; stats go to the log only
    print!("{}", ensure_trailing_newline(rendered));

    info!(
        "Run complete in {:.3}s",
        output.stats.elapsed.as_secs_f64()
    );

    Ok(output.stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(cmd: &ClassifyArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = cmd.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mesh_classifier={}", log_level)));

    // Logs go to stderr so the collection on stdout stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn ensure_trailing_newline(mut rendered: String) -> String {
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

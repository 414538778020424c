//! Command-line argument definitions for the mesh classifier
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::GroupingMode;
use crate::constants::DEFAULT_INPUT_FILE;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the mesh node classifier
///
/// Classifies community mesh network nodes from the public node export and
/// prints the classified collection.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mesh-classifier",
    version,
    about = "Classify community mesh network nodes from the public node export",
    long_about = "Reads the community node export (a CSV file), keeps rows whose status is \
                  exactly 'Installed', classifies each kept node as a hub, supernode, or plain \
                  node from its notes and name columns, and prints the classified collection."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the mesh classifier
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Classify the node export and print the collection (main command)
    Classify(ClassifyArgs),
}

/// Arguments for the classify command
#[derive(Debug, Clone, Parser)]
pub struct ClassifyArgs {
    /// Path to the node export CSV
    ///
    /// If not specified, reads nodes.csv from the working directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to the node export CSV"
    )]
    pub input_path: Option<PathBuf>,

    /// Treat the first row as a header
    ///
    /// The header row is consumed before classification and echoed above
    /// the report instead of being classified as data.
    #[arg(
        long = "skip-header",
        help = "Consume the first row as a header and echo it above the report"
    )]
    pub skip_header: bool,

    /// Group the output by category
    ///
    /// By default records are printed in source row order. This flag orders
    /// them as plain nodes, then hubs, then supernodes, each group keeping
    /// source order.
    #[arg(
        long = "grouped",
        help = "Order output as plain nodes, then hubs, then supernodes"
    )]
    pub grouped: bool,

    /// Output format for the classified collection
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the classified collection"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the classified collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable dump
    Human,
    /// JSON array of records
    Json,
    /// CSV, one record per line
    Csv,
    /// GeoJSON FeatureCollection
    Geojson,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ClassifyArgs {
    /// Validate the classify command arguments for consistency
    ///
    /// Existence of the input file is deliberately not checked here: a
    /// missing file is a runtime not-found error when the classifier opens
    /// it, not a configuration error.
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory, not a file: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// The input path, defaulting to the export in the working directory
    pub fn get_input_path(&self) -> PathBuf {
        self.input_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE))
    }

    /// The grouping mode selected by the flags
    pub fn get_grouping(&self) -> GroupingMode {
        if self.grouped {
            GroupingMode::Grouped
        } else {
            GroupingMode::Flat
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

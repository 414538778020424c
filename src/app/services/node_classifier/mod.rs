//! Node classification service
//!
//! Reads the node export once, front to back, and produces the classified
//! collection: open the file, iterate rows, drop rows whose status is not
//! `"Installed"`, extract and classify the rest, collect in source order.
//!
//! ## Architecture
//!
//! - [`schema`] - named-field column layout with from-start and from-end offsets
//! - [`parser`] - row to record extraction honouring the status filter
//! - [`classifier`] - the three-way category rule
//! - [`addressing`] - network-number to address-block mapping
//! - [`report`] - rendering of the final collection
//!
//! The run is single-threaded and synchronous; the file handle is scoped to
//! [`NodeClassifier::run`] and released when reading completes or fails.

use crate::app::models::{NodeCategory, NodeRecord};
use crate::config::Config;
use crate::{Error, Result};
use std::fs::File;
use std::io::ErrorKind;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub mod addressing;
pub mod classifier;
pub mod parser;
pub mod report;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use schema::{ColumnIndex, ColumnSchema};

/// Counters for one classification run
///
/// `rows_read` counts data rows only; a consumed header row is not a data
/// row. Stats are reported through logging and never alter the printed
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    /// Data rows examined
    pub rows_read: usize,

    /// Rows dropped by the status filter
    pub rows_skipped: usize,

    /// Records classified as hubs
    pub hubs: usize,

    /// Records classified as supernodes
    pub supernodes: usize,

    /// Records classified as plain nodes
    pub plain_nodes: usize,

    /// Wall-clock time for the run
    pub elapsed: Duration,
}

impl ClassificationStats {
    /// Total records produced
    pub fn records_classified(&self) -> usize {
        self.hubs + self.supernodes + self.plain_nodes
    }

    fn count(&mut self, category: NodeCategory) {
        match category {
            NodeCategory::Hub => self.hubs += 1,
            NodeCategory::Supernode => self.supernodes += 1,
            NodeCategory::Node => self.plain_nodes += 1,
        }
    }
}

/// Result of one classification run
#[derive(Debug, Clone)]
pub struct ClassifierOutput {
    /// The consumed header row, if the run was configured to consume one
    pub header: Option<Vec<String>>,

    /// Classified records in source row order
    pub records: Vec<NodeRecord>,

    /// Run counters
    pub stats: ClassificationStats,
}

/// The node classifier
#[derive(Debug, Clone)]
pub struct NodeClassifier {
    config: Config,
}

impl NodeClassifier {
    /// Create a classifier for the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the read-filter-classify-collect pipeline to completion.
    ///
    /// Any failure - missing file, unreadable CSV, short row - aborts the
    /// run; there is no partial result and no skip-and-continue.
    pub fn run(&self) -> Result<ClassifierOutput> {
        let start = Instant::now();
        let path = &self.config.input_path;

        debug!("Opening node export: {}", path.display());
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to open '{}'", path.display()), e),
        })?;

        // Header handling is explicit via the configuration, and rows are
        // allowed to vary in width so short rows reach the schema's own
        // contextual error instead of the reader's length check.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut header = None;
        let mut records = Vec::new();
        let mut stats = ClassificationStats::default();

        for (i, row) in reader.records().enumerate() {
            let row_number = i + 1;
            let row = row.map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    format!("Failed to read row {}", row_number),
                    Some(e),
                )
            })?;

            if row_number == 1 && self.config.skip_header {
                header = Some(row.iter().map(str::to_string).collect());
                continue;
            }

            stats.rows_read += 1;
            match parser::extract_record(&row, &self.config.schema, row_number)? {
                Some(record) => {
                    stats.count(record.category);
                    records.push(record);
                }
                None => stats.rows_skipped += 1,
            }
        }

        stats.elapsed = start.elapsed();
        info!(
            "Classified {} of {} rows: {} nodes, {} hubs, {} supernodes ({} skipped)",
            stats.records_classified(),
            stats.rows_read,
            stats.plain_nodes,
            stats.hubs,
            stats.supernodes,
            stats.rows_skipped,
        );

        Ok(ClassifierOutput {
            header,
            records,
            stats,
        })
    }
}

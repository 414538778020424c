//! Configuration for a classification run.
//!
//! The configuration is an immutable value constructed once (defaults plus
//! CLI overrides) and passed to the classifier, so the column mapping and
//! the variant switches are testable in isolation with synthetic rows.

use crate::Result;
use crate::app::services::node_classifier::schema::ColumnSchema;
use crate::constants::DEFAULT_INPUT_FILE;
use std::path::PathBuf;

/// Ordering of the final collection
///
/// The two orderings observed in the wild are both supported explicitly
/// rather than guessing a single intended behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
    /// Every qualifying record in source row order (the general form)
    #[default]
    Flat,

    /// Stable partition: plain nodes first, then hubs, then supernodes,
    /// each bucket in source order
    Grouped,
}

/// Configuration for the node classifier
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the node export CSV
    pub input_path: PathBuf,

    /// Consume the first row as a header and echo it above the report
    pub skip_header: bool,

    /// Ordering of the final collection
    pub grouping: GroupingMode,

    /// Column layout of the export
    pub schema: ColumnSchema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            skip_header: false,
            grouping: GroupingMode::Flat,
            schema: ColumnSchema::default(),
        }
    }
}

impl Config {
    /// Create configuration with a custom input path
    pub fn with_input_path(mut self, input_path: PathBuf) -> Self {
        self.input_path = input_path;
        self
    }

    /// Treat the first row as a header
    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    /// Set the output grouping mode
    pub fn with_grouping(mut self, grouping: GroupingMode) -> Self {
        self.grouping = grouping;
        self
    }

    /// Override the column layout
    pub fn with_schema(mut self, schema: ColumnSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Validate the configuration for consistency
    ///
    /// Existence of the input file is deliberately not checked here: a
    /// missing file surfaces as a not-found error when the run opens it.
    pub fn validate(&self) -> Result<()> {
        self.schema.validate()
    }
}

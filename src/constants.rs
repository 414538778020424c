//! Application constants for the mesh classifier
//!
//! This module contains the default column layout of the node export,
//! the status filter literal, and the classification markers.

/// Default input file, resolved relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "nodes.csv";

/// Status value a row must equal exactly for a record to be produced.
/// Case-sensitive, no trimming.
pub const INSTALLED_STATUS: &str = "Installed";

// =============================================================================
// Node Export Column Layout
// =============================================================================

/// Default column offsets in the node export.
///
/// Offsets counted from the start are 0-based. The coordinate columns sit at
/// the end of the row and are addressed from the end (1-based, so an offset
/// of 1 is the final field) because the export carries a variable number of
/// columns between the identity block and the coordinate block.
pub mod columns {
    /// Installation status column
    pub const STATUS: usize = 15;

    /// Node name column, searched for the supernode marker
    pub const NAME: usize = 18;

    /// Free-text notes column, searched for the hub marker
    pub const NOTES: usize = 19;

    /// Node identifier column
    pub const ID: usize = 23;

    /// Network number column
    pub const NN: usize = 24;

    /// Latitude, third field from the end of the row
    pub const LAT_FROM_END: usize = 3;

    /// Longitude, second field from the end of the row
    pub const LNG_FROM_END: usize = 2;

    /// Altitude, final field of the row
    pub const ALT_FROM_END: usize = 1;
}

// =============================================================================
// Classification Markers
// =============================================================================

/// Substrings searched for (case-insensitively) when assigning a category
pub mod markers {
    /// Marker in the notes column that makes a node a hub
    pub const HUB: &str = "hub";

    /// Marker in the name column that makes a node a supernode
    pub const SUPERNODE: &str = "supernode";
}

/// Canonical category labels as they appear in every output format
pub mod category_names {
    pub const NODE: &str = "node";
    pub const HUB: &str = "hub";
    pub const SUPERNODE: &str = "supernode";
}

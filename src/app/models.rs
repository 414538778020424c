//! Data models for mesh node classification
//!
//! This module contains the core data structures representing a classified
//! node from the mesh network's node export.

use crate::constants::category_names;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Node Category
// =============================================================================

/// Category assigned to an installed node
///
/// Categories are mutually exclusive. The assignment rule lives in
/// [`crate::app::services::node_classifier::classifier`]; the hub check runs
/// first, the supernode check second, and everything else is a plain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// Plain node with no special role
    Node,

    /// Hub site, flagged in the notes column
    Hub,

    /// Supernode, flagged in the name column
    Supernode,
}

impl NodeCategory {
    /// Canonical label for this category
    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::Node => category_names::NODE,
            NodeCategory::Hub => category_names::HUB,
            NodeCategory::Supernode => category_names::SUPERNODE,
        }
    }

    /// Bucket order used by the grouped report: plain nodes first, then
    /// hubs, then supernodes. This is a presentation order and is distinct
    /// from the order the classification checks run in.
    pub const REPORT_ORDER: [NodeCategory; 3] = [
        NodeCategory::Node,
        NodeCategory::Hub,
        NodeCategory::Supernode,
    ];
}

impl FromStr for NodeCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            category_names::NODE => Ok(NodeCategory::Node),
            category_names::HUB => Ok(NodeCategory::Hub),
            category_names::SUPERNODE => Ok(NodeCategory::Supernode),
            other => Err(Error::data_validation(format!(
                "Invalid node category '{}': must be one of node, hub, supernode",
                other
            ))),
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Node Record
// =============================================================================

/// The classified, extracted representation of one installed node
///
/// All five text fields are copied verbatim from the source row. The
/// coordinate fields deliberately stay opaque text in the core: parsing them
/// to numbers is a downstream step performed only by renderers that need it
/// (the GeoJSON report), so the core never invents a numeric failure mode
/// the export itself does not have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node identifier, verbatim
    pub id: String,

    /// Network number, verbatim
    pub nn: String,

    /// Latitude as text, verbatim
    pub lat: String,

    /// Longitude as text, verbatim
    pub lng: String,

    /// Altitude as text, verbatim
    pub alt: String,

    /// Assigned category
    #[serde(rename = "type")]
    pub category: NodeCategory,
}

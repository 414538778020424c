//! Category assignment for installed nodes

use crate::app::models::NodeCategory;
use crate::constants::markers;

/// Assign a category from the name and notes columns.
///
/// The checks run in a fixed order and the first match wins: a hub marker
/// anywhere in the notes makes the node a hub regardless of its name, a
/// supernode marker in the name makes it a supernode, and everything else
/// is a plain node. Both searches are case-insensitive substring matches.
pub fn classify(name: &str, notes: &str) -> NodeCategory {
    if notes.to_lowercase().contains(markers::HUB) {
        NodeCategory::Hub
    } else if name.to_lowercase().contains(markers::SUPERNODE) {
        NodeCategory::Supernode
    } else {
        NodeCategory::Node
    }
}

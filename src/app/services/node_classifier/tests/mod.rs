//! Shared test fixtures for node classifier tests

use crate::app::models::{NodeCategory, NodeRecord};
use csv::StringRecord;

pub mod parser_tests;
pub mod report_tests;

/// Width of a synthetic export row. Wide enough that the from-start block
/// (id at 23, nn at 24) and the from-end coordinate block (last three
/// fields) address distinct columns, as in the real export.
pub const TEST_ROW_WIDTH: usize = 28;

/// Build a synthetic export row with the relevant fields set and
/// placeholder text everywhere else
#[allow(clippy::too_many_arguments)]
pub fn make_row(
    status: &str,
    name: &str,
    notes: &str,
    id: &str,
    nn: &str,
    lat: &str,
    lng: &str,
    alt: &str,
) -> StringRecord {
    let mut fields: Vec<String> = (0..TEST_ROW_WIDTH).map(|i| format!("col{}", i)).collect();
    fields[15] = status.to_string();
    fields[18] = name.to_string();
    fields[19] = notes.to_string();
    fields[23] = id.to_string();
    fields[24] = nn.to_string();
    fields[TEST_ROW_WIDTH - 3] = lat.to_string();
    fields[TEST_ROW_WIDTH - 2] = lng.to_string();
    fields[TEST_ROW_WIDTH - 1] = alt.to_string();
    StringRecord::from(fields)
}

/// Build an installed row with standard coordinates
pub fn make_installed_row(name: &str, notes: &str, id: &str, nn: &str) -> StringRecord {
    make_row(
        "Installed",
        name,
        notes,
        id,
        nn,
        "40.7051",
        "-73.9332",
        "10",
    )
}

/// Build a classified record directly, bypassing the parser
pub fn create_test_record(id: &str, nn: &str, category: NodeCategory) -> NodeRecord {
    NodeRecord {
        id: id.to_string(),
        nn: nn.to_string(),
        lat: "40.7051".to_string(),
        lng: "-73.9332".to_string(),
        alt: "10".to_string(),
        category,
    }
}

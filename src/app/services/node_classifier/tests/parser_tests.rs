//! Tests for record extraction from export rows

use super::{make_installed_row, make_row};
use crate::Error;
use crate::app::models::NodeCategory;
use crate::app::services::node_classifier::parser::extract_record;
use crate::app::services::node_classifier::schema::ColumnSchema;
use csv::StringRecord;

#[test]
fn test_extracts_installed_row_verbatim() {
    let schema = ColumnSchema::default();
    let row = make_row(
        "Installed",
        "Node42",
        "Main Hub site",
        "N42",
        "100",
        "1.23",
        "4.56",
        "10",
    );

    let record = extract_record(&row, &schema, 1).unwrap().unwrap();
    assert_eq!(record.id, "N42");
    assert_eq!(record.nn, "100");
    assert_eq!(record.lat, "1.23");
    assert_eq!(record.lng, "4.56");
    assert_eq!(record.alt, "10");
    assert_eq!(record.category, NodeCategory::Hub);
}

#[test]
fn test_supernode_and_plain_node_rows() {
    let schema = ColumnSchema::default();

    let row = make_installed_row("SuperNode Alpha", "", "S1", "713");
    let record = extract_record(&row, &schema, 1).unwrap().unwrap();
    assert_eq!(record.category, NodeCategory::Supernode);

    let row = make_installed_row("Regular Node", "", "R1", "1000");
    let record = extract_record(&row, &schema, 2).unwrap().unwrap();
    assert_eq!(record.category, NodeCategory::Node);
}

#[test]
fn test_non_installed_rows_are_dropped() {
    let schema = ColumnSchema::default();

    for status in ["Planned", "Abandoned", "", "Dead"] {
        let row = make_row(status, "Node", "", "N1", "1", "0", "0", "0");
        assert!(extract_record(&row, &schema, 1).unwrap().is_none());
    }
}

#[test]
fn test_status_filter_is_exact_match() {
    let schema = ColumnSchema::default();

    // Not case-insensitive
    let row = make_row("installed", "Node", "", "N1", "1", "0", "0", "0");
    assert!(extract_record(&row, &schema, 1).unwrap().is_none());

    // Not trimmed
    let row = make_row(" Installed", "Node", "", "N1", "1", "0", "0", "0");
    assert!(extract_record(&row, &schema, 1).unwrap().is_none());

    let row = make_row("Installed ", "Node", "", "N1", "1", "0", "0", "0");
    assert!(extract_record(&row, &schema, 1).unwrap().is_none());
}

#[test]
fn test_row_too_short_for_status_is_fatal() {
    let schema = ColumnSchema::default();
    let row = StringRecord::from(vec!["x"; 12]);

    let err = extract_record(&row, &schema, 3).unwrap_err();
    assert!(matches!(
        err,
        Error::ShortRow {
            field: "status",
            row_number: 3,
            ..
        }
    ));
}

#[test]
fn test_installed_row_too_short_for_id_is_fatal() {
    let schema = ColumnSchema::default();

    // 20 columns: status at 15 resolves, id at 23 does not
    let mut fields = vec!["x".to_string(); 20];
    fields[15] = "Installed".to_string();
    let row = StringRecord::from(fields);

    let err = extract_record(&row, &schema, 5).unwrap_err();
    assert!(matches!(
        err,
        Error::ShortRow {
            field: "id",
            row_number: 5,
            needed: 24,
            actual: 20,
        }
    ));
}

#[test]
fn test_short_non_installed_row_is_just_dropped() {
    let schema = ColumnSchema::default();

    // Too short for id, but the status filter drops it before extraction
    let mut fields = vec!["x".to_string(); 20];
    fields[15] = "Planned".to_string();
    let row = StringRecord::from(fields);

    assert!(extract_record(&row, &schema, 1).unwrap().is_none());
}

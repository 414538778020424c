//! Tests for report rendering

use super::create_test_record;
use crate::app::models::NodeCategory;
use crate::app::services::node_classifier::report;
use crate::app::services::node_classifier::{ClassificationStats, ClassifierOutput};
use crate::config::GroupingMode;

fn create_test_output() -> ClassifierOutput {
    // Source order deliberately interleaves the categories
    ClassifierOutput {
        header: None,
        records: vec![
            create_test_record("H1", "100", NodeCategory::Hub),
            create_test_record("N1", "200", NodeCategory::Node),
            create_test_record("S1", "713", NodeCategory::Supernode),
            create_test_record("N2", "300", NodeCategory::Node),
            create_test_record("H2", "400", NodeCategory::Hub),
        ],
        stats: ClassificationStats::default(),
    }
}

#[test]
fn test_flat_ordering_keeps_source_order() {
    let output = create_test_output();
    let ordered = report::ordered(&output.records, GroupingMode::Flat);
    let ids: Vec<&str> = ordered.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["H1", "N1", "S1", "N2", "H2"]);
}

#[test]
fn test_grouped_ordering_partitions_stably() {
    let output = create_test_output();
    let ordered = report::ordered(&output.records, GroupingMode::Grouped);
    let ids: Vec<&str> = ordered.iter().map(|r| r.id.as_str()).collect();
    // Plain nodes first, then hubs, then supernodes, each in source order
    assert_eq!(ids, ["N1", "N2", "H1", "H2", "S1"]);
}

#[test]
fn test_json_render_shape() {
    let output = create_test_output();
    let json = report::render_json(&output, GroupingMode::Flat).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["id"], "H1");
    assert_eq!(records[0]["type"], "hub");
    assert_eq!(records[2]["type"], "supernode");
    assert_eq!(records[0]["lat"], "40.7051");
}

#[test]
fn test_json_render_empty_collection() {
    let output = ClassifierOutput {
        header: None,
        records: Vec::new(),
        stats: ClassificationStats::default(),
    };
    assert_eq!(report::render_json(&output, GroupingMode::Flat).unwrap(), "[]");
}

#[test]
fn test_csv_render() {
    let output = create_test_output();
    let csv_text = report::render_csv(&output, GroupingMode::Flat).unwrap();
    let mut lines = csv_text.lines();

    assert_eq!(lines.next(), Some("id,nn,lat,lng,alt,type"));
    assert_eq!(lines.next(), Some("H1,100,40.7051,-73.9332,10,hub"));
    assert_eq!(csv_text.lines().count(), 6);
}

#[test]
fn test_geojson_render() {
    let output = create_test_output();
    let geojson = report::render_geojson(&output, GroupingMode::Flat).unwrap();
    let value: serde_json::Value = serde_json::from_str(&geojson).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 5);

    // Coordinates are numeric [lng, lat]; the category rides as node_type
    let first = &features[0];
    assert_eq!(first["geometry"]["type"], "Point");
    assert_eq!(first["geometry"]["coordinates"][0], -73.9332);
    assert_eq!(first["geometry"]["coordinates"][1], 40.7051);
    assert_eq!(first["properties"]["node_type"], "hub");
    assert_eq!(first["properties"]["id"], "H1");
}

#[test]
fn test_geojson_rejects_malformed_coordinates() {
    let mut output = create_test_output();
    output.records[1].lat = "forty point seven".to_string();

    let err = report::render_geojson(&output, GroupingMode::Flat).unwrap_err();
    let message = format!("{}", err);
    assert!(message.contains("latitude"));
    assert!(message.contains("N1"));
}

#[test]
fn test_human_render_lists_records_and_addresses() {
    let output = create_test_output();
    let text = report::render_human(&output, GroupingMode::Flat);

    assert!(text.contains("id=H1"));
    assert!(text.contains("lat=40.7051"));
    // nn 713 maps into the 10.7.13 block
    assert!(text.contains("net=10.7.13.0"));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn test_human_render_echoes_header() {
    let mut output = create_test_output();
    output.header = Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]);

    let text = report::render_human(&output, GroupingMode::Flat);
    assert!(text.starts_with("a,b,c\n"));
}

#[test]
fn test_human_render_empty_collection_prints_nothing() {
    let output = ClassifierOutput {
        header: None,
        records: Vec::new(),
        stats: ClassificationStats::default(),
    };
    assert_eq!(report::render_human(&output, GroupingMode::Flat), "");
}

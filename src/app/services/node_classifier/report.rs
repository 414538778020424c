//! Rendering of the classified collection
//!
//! The collection is printed to stdout in one of four formats. The human
//! format is the default textual dump; JSON matches the record shape the
//! map front end fetches; CSV is one line per record; GeoJSON emits a
//! FeatureCollection with the category under the `node_type` property.
//!
//! GeoJSON is the only renderer that parses the stored coordinate text to
//! numbers. That is the sanctioned downstream step: a malformed coordinate
//! is fatal in this format and invisible in every other.

use super::ClassifierOutput;
use super::addressing;
use crate::app::models::{NodeCategory, NodeRecord};
use crate::config::GroupingMode;
use crate::{Error, Result};
use colored::Colorize;

/// Order the collection for presentation.
///
/// Flat keeps source row order. Grouped is a stable partition into plain
/// nodes, hubs, and supernodes, each bucket keeping source order.
pub fn ordered(records: &[NodeRecord], grouping: GroupingMode) -> Vec<&NodeRecord> {
    match grouping {
        GroupingMode::Flat => records.iter().collect(),
        GroupingMode::Grouped => NodeCategory::REPORT_ORDER
            .iter()
            .flat_map(|category| records.iter().filter(move |r| r.category == *category))
            .collect(),
    }
}

/// Render the human-readable dump.
///
/// When a header row was consumed it is echoed verbatim above the records.
/// Category colours follow the map: hubs cyan, supernodes blue, nodes red.
pub fn render_human(output: &ClassifierOutput, grouping: GroupingMode) -> String {
    let mut out = String::new();

    if let Some(header) = &output.header {
        out.push_str(&header.join(","));
        out.push('\n');
    }

    for record in ordered(&output.records, grouping) {
        let label = format!("{:<9}", record.category.as_str());
        let label = match record.category {
            NodeCategory::Hub => label.cyan(),
            NodeCategory::Supernode => label.blue(),
            NodeCategory::Node => label.red(),
        };

        let net = addressing::nn_to_ip(&record.nn)
            .map(|octets| format!("  net=10.{}.0", octets))
            .unwrap_or_default();

        out.push_str(&format!(
            "{} id={:<8} nn={:<6} lat={} lng={} alt={}{}\n",
            label, record.id, record.nn, record.lat, record.lng, record.alt, net
        ));
    }

    out
}

/// Render the collection as a JSON array of records
pub fn render_json(output: &ClassifierOutput, grouping: GroupingMode) -> Result<String> {
    serde_json::to_string_pretty(&ordered(&output.records, grouping))
        .map_err(|e| Error::data_validation(format!("Failed to serialize records: {}", e)))
}

/// Render the collection as CSV, one record per line
pub fn render_csv(output: &ClassifierOutput, grouping: GroupingMode) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["id", "nn", "lat", "lng", "alt", "type"])?;
    for record in ordered(&output.records, grouping) {
        writer.write_record([
            record.id.as_str(),
            record.nn.as_str(),
            record.lat.as_str(),
            record.lng.as_str(),
            record.alt.as_str(),
            record.category.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::data_validation(format!("Failed to flush CSV report: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::data_validation(format!("CSV report is not valid UTF-8: {}", e)))
}

/// Render the collection as a GeoJSON FeatureCollection
pub fn render_geojson(output: &ClassifierOutput, grouping: GroupingMode) -> Result<String> {
    let features = ordered(&output.records, grouping)
        .into_iter()
        .map(|record| {
            let lat = parse_coordinate(&record.lat, "latitude", &record.id)?;
            let lng = parse_coordinate(&record.lng, "longitude", &record.id)?;

            Ok(serde_json::json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [lng, lat],
                },
                "properties": {
                    "id": record.id,
                    "nn": record.nn,
                    "alt": record.alt,
                    "node_type": record.category.as_str(),
                },
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let collection = serde_json::json!({
        "type": "FeatureCollection",
        "features": features,
    });

    serde_json::to_string_pretty(&collection)
        .map_err(|e| Error::data_validation(format!("Failed to serialize GeoJSON: {}", e)))
}

fn parse_coordinate(text: &str, what: &str, id: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| Error::data_validation(format!("Invalid {} '{}' for node '{}'", what, text, id)))
}

//! Record extraction from node export rows

use super::classifier;
use super::schema::ColumnSchema;
use crate::Result;
use crate::app::models::NodeRecord;
use crate::constants::INSTALLED_STATUS;
use csv::StringRecord;

/// Extract a classified record from one data row.
///
/// Returns `Ok(None)` for rows whose status is not exactly `"Installed"`
/// (case-sensitive, untrimmed). A row too short for any referenced column
/// is an error, not a skip: the export is fixed-shape and a short row means
/// the file is malformed.
pub fn extract_record(
    row: &StringRecord,
    schema: &ColumnSchema,
    row_number: usize,
) -> Result<Option<NodeRecord>> {
    let status = schema.get(row, schema.status, "status", row_number)?;
    if status != INSTALLED_STATUS {
        return Ok(None);
    }

    let id = schema.get(row, schema.id, "id", row_number)?.to_string();
    let nn = schema.get(row, schema.nn, "nn", row_number)?.to_string();
    let lat = schema.get(row, schema.lat, "lat", row_number)?.to_string();
    let lng = schema.get(row, schema.lng, "lng", row_number)?.to_string();
    let alt = schema.get(row, schema.alt, "alt", row_number)?.to_string();

    let notes = schema.get(row, schema.notes, "notes", row_number)?;
    let name = schema.get(row, schema.name, "name", row_number)?;
    let category = classifier::classify(name, notes);

    Ok(Some(NodeRecord {
        id,
        nn,
        lat,
        lng,
        alt,
        category,
    }))
}

//! Named-field column schema for the node export
//!
//! The export addresses its identity block from the start of the row and its
//! coordinate block from the end. This module resolves both kinds of offset
//! against a concrete row, so a short row surfaces as an error naming the
//! field and row number instead of an opaque index fault.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;

/// Position of one column, counted from either end of the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnIndex {
    /// 0-based offset from the start of the row
    FromStart(usize),

    /// 1-based offset from the end of the row; `FromEnd(1)` is the final field
    FromEnd(usize),
}

impl ColumnIndex {
    /// Resolve this position against a row of `row_len` fields
    pub fn resolve(self, row_len: usize) -> Option<usize> {
        match self {
            ColumnIndex::FromStart(offset) if offset < row_len => Some(offset),
            ColumnIndex::FromEnd(offset) if offset >= 1 && offset <= row_len => {
                Some(row_len - offset)
            }
            _ => None,
        }
    }

    /// Minimum row width at which this position resolves
    pub fn min_row_len(self) -> usize {
        match self {
            ColumnIndex::FromStart(offset) => offset + 1,
            ColumnIndex::FromEnd(offset) => offset,
        }
    }
}

/// Column layout of the node export
///
/// Resolved once at startup and passed to the parser, rather than scattering
/// numeric offsets through the extraction code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub status: ColumnIndex,
    pub name: ColumnIndex,
    pub notes: ColumnIndex,
    pub id: ColumnIndex,
    pub nn: ColumnIndex,
    pub lat: ColumnIndex,
    pub lng: ColumnIndex,
    pub alt: ColumnIndex,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            status: ColumnIndex::FromStart(columns::STATUS),
            name: ColumnIndex::FromStart(columns::NAME),
            notes: ColumnIndex::FromStart(columns::NOTES),
            id: ColumnIndex::FromStart(columns::ID),
            nn: ColumnIndex::FromStart(columns::NN),
            lat: ColumnIndex::FromEnd(columns::LAT_FROM_END),
            lng: ColumnIndex::FromEnd(columns::LNG_FROM_END),
            alt: ColumnIndex::FromEnd(columns::ALT_FROM_END),
        }
    }
}

impl ColumnSchema {
    /// Fetch a field from a row, with a contextual error when the row is
    /// too short for the requested position
    pub fn get<'r>(
        &self,
        row: &'r StringRecord,
        index: ColumnIndex,
        field: &'static str,
        row_number: usize,
    ) -> Result<&'r str> {
        index
            .resolve(row.len())
            .and_then(|i| row.get(i))
            .ok_or_else(|| Error::short_row(row_number, field, index.min_row_len(), row.len()))
    }

    /// Validate the schema for consistency
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("status", self.status),
            ("name", self.name),
            ("notes", self.notes),
            ("id", self.id),
            ("nn", self.nn),
            ("lat", self.lat),
            ("lng", self.lng),
            ("alt", self.alt),
        ];

        for (field, index) in named {
            if let ColumnIndex::FromEnd(0) = index {
                return Err(Error::configuration(format!(
                    "Column '{}': from-end offsets are 1-based, 0 is not a position",
                    field
                )));
            }
        }

        Ok(())
    }
}

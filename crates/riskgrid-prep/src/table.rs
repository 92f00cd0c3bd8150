//! Raw survey table model
//!
//! This module carries rows as they arrive from an external loader: a
//! mapping from column name to an untyped cell value. Nothing here
//! interprets values; numeric meaning is assigned later by the
//! [`normalize`](crate::normalize) stage, which keeps ingestion total and
//! pushes all "is this a number?" decisions into one place.
//!
//! # Schema sampling
//!
//! Datasets are assumed column-homogeneous: every row carries the same
//! columns. Column-name resolution therefore samples the *first* row once
//! ([`Table::schema_row`]) and reuses the outcome for all rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw cell value as delivered by an external loader.
///
/// Serialized untagged, so JSON row sets map directly: `null` → [`Null`],
/// numbers → [`Number`], strings → [`Text`].
///
/// [`Null`]: RawValue::Null
/// [`Number`]: RawValue::Number
/// [`Text`]: RawValue::Text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// An absent or empty cell.
    Null,
    /// A cell the loader already recognized as numeric.
    Number(f32),
    /// Any other cell content, verbatim.
    Text(String),
}

/// One survey row: an ordered mapping from column name to raw cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, RawValue>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, replacing any previous value for the column.
    pub fn insert(&mut self, column: impl Into<String>, value: RawValue) {
        self.cells.insert(column.into(), value);
    }

    /// Returns the cell for `column`, or `None` if the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.cells.get(column)
    }

    /// Returns `true` if the row carries `column` (even with a null value).
    #[must_use]
    pub fn contains_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Iterates over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, RawValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of rows sourced from one delimited-text table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from already-loaded rows.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns all rows, in load order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the first row, used as the schema sample for key resolution.
    #[must_use]
    pub fn schema_row(&self) -> Option<&Row> {
        self.rows.first()
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

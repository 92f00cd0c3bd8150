//! Numeric column derivation from raw tables
//!
//! A [`NumericDataset`] is the columnar, normalized view of one raw table:
//! per logical variable a `Vec<Option<f32>>` aligned by row index, plus the
//! trimmed grouping value per row. It is computed once per table load and
//! immutable afterward, so binners and samplers built on top of it share
//! one consistent snapshot.

use std::collections::BTreeMap;

use crate::{
    normalize::normalize,
    table::{RawValue, Table},
    variable::{self, SurveyVariable},
};

/// Normalized, columnar view of one survey table.
#[derive(Debug, Clone)]
pub struct NumericDataset {
    /// Resolved grouping column, if the schema sample carried one.
    country_key: Option<&'static str>,
    /// Trimmed grouping value per row; `None` for blank or missing cells.
    country: Vec<Option<String>>,
    /// One nullable numeric column per registered logical variable.
    columns: BTreeMap<&'static str, Vec<Option<f32>>>,
}

impl NumericDataset {
    /// Derives numeric columns for `variables` from a raw table.
    ///
    /// Column names are resolved once against the table's first row and
    /// reused for every row. A variable with no matching spelling yields an
    /// entirely-null column; the miss is logged, not raised.
    #[must_use]
    pub fn from_table<V>(table: &Table, variables: &[V]) -> Self
    where
        V: SurveyVariable,
    {
        let schema = table.schema_row();
        let country_key = schema.and_then(variable::resolve_country_key);

        let resolutions = variables
            .iter()
            .map(|&v| {
                let resolution = schema.map_or(
                    variable::KeyResolution::Missing(v.id()),
                    |row| variable::resolve_key(row, v),
                );
                if !resolution.is_present() {
                    tracing::debug!(
                        variable = v.id(),
                        "no matching column spelling; column degrades to null"
                    );
                }
                (v.id(), resolution)
            })
            .collect::<Vec<_>>();

        let mut country = Vec::with_capacity(table.len());
        let mut columns: BTreeMap<&'static str, Vec<Option<f32>>> = resolutions
            .iter()
            .map(|(id, _)| (*id, Vec::with_capacity(table.len())))
            .collect();

        for row in table.rows() {
            country.push(
                country_key
                    .and_then(|key| row.get(key))
                    .and_then(country_value),
            );
            for (id, resolution) in &resolutions {
                let value = row.get(resolution.column()).and_then(normalize);
                columns
                    .get_mut(id)
                    .expect("every resolved variable has a column")
                    .push(value);
            }
        }

        Self {
            country_key,
            country,
            columns,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.country.len()
    }

    /// Returns `true` if the dataset holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.country.is_empty()
    }

    /// Returns the resolved grouping column name, if any.
    #[must_use]
    pub fn country_key(&self) -> Option<&'static str> {
        self.country_key
    }

    /// Returns the numeric column for a logical id, aligned by row index.
    ///
    /// Unregistered ids read as an empty column.
    #[must_use]
    pub fn column(&self, id: &str) -> &[Option<f32>] {
        self.columns.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns the value at `(id, row)`, if present and finite.
    #[must_use]
    pub fn value_at(&self, id: &str, row: usize) -> Option<f32> {
        self.column(id).get(row).copied().flatten()
    }

    /// Collects the finite values of a column, in row order.
    #[must_use]
    pub fn finite_values(&self, id: &str) -> Vec<f32> {
        self.column(id).iter().copied().flatten().collect()
    }

    /// Groups row indices by country value.
    ///
    /// `None` when the table carried no grouping column at all; rows with a
    /// blank grouping cell belong to no group.
    #[must_use]
    pub fn group_by_country(&self) -> Option<BTreeMap<&str, Vec<usize>>> {
        self.country_key?;
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (index, country) in self.country.iter().enumerate() {
            if let Some(country) = country {
                groups.entry(country.as_str()).or_default().push(index);
            }
        }
        Some(groups)
    }

    /// Mean of a column's finite values over the given row indices.
    ///
    /// `None` when no finite value exists among them.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn group_mean(&self, id: &str, rows: &[usize]) -> Option<f32> {
        let values = rows
            .iter()
            .filter_map(|&row| self.value_at(id, row))
            .collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f32>() / values.len() as f32)
    }
}

fn country_value(raw: &RawValue) -> Option<String> {
    match raw {
        RawValue::Text(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        RawValue::Number(n) => Some(n.to_string()),
        RawValue::Null => None,
    }
}

//! CSV ingestion
//!
//! Reads a delimited survey export into a raw [`Table`]. Ingestion stays
//! deliberately dumb: empty or whitespace-only fields become null, every
//! other field stays text verbatim. Deciding what is numeric (including
//! comma decimals and Likert words) is the normalizer's job, not the
//! reader's.

use std::{io, path::Path};

use anyhow::Context;

use riskgrid_prep::table::{RawValue, Row, Table};

/// Loads a headered CSV file into a raw table.
///
/// Short records are tolerated; missing trailing fields simply leave their
/// columns absent from that row.
pub fn load_table<P>(path: P) -> anyhow::Result<Table>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let table = table_from_reader(reader)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "table loaded");
    Ok(table)
}

fn table_from_reader<R>(mut reader: csv::Reader<R>) -> anyhow::Result<Table>
where
    R: io::Read,
{
    let headers = reader.headers().context("failed to read CSV headers")?.clone();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("failed to read CSV record {}", index + 1))?;
        let mut row = Row::new();
        for (column, field) in headers.iter().zip(record.iter()) {
            let trimmed = field.trim();
            let value = if trimmed.is_empty() {
                RawValue::Null
            } else {
                RawValue::Text(trimmed.to_owned())
            };
            row.insert(column, value);
        }
        rows.push(row);
    }
    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv_text: &str) -> Table {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());
        table_from_reader(reader).unwrap()
    }

    #[test]
    fn fields_stay_text_and_blanks_become_null() {
        let table = parse("country,stress_level\nFR,4\nDE,\n");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows()[0].get("stress_level"),
            Some(&RawValue::Text("4".to_owned()))
        );
        assert_eq!(table.rows()[1].get("stress_level"), Some(&RawValue::Null));
    }

    #[test]
    fn short_records_leave_columns_absent() {
        let table = parse("a,b,c\n1,2\n");
        let row = &table.rows()[0];
        assert!(row.contains_column("b"));
        assert!(!row.contains_column("c"));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let table = parse("v\n  très élevé  \n   \n");
        assert_eq!(
            table.rows()[0].get("v"),
            Some(&RawValue::Text("très élevé".to_owned()))
        );
        assert_eq!(table.rows()[1].get("v"), Some(&RawValue::Null));
    }
}

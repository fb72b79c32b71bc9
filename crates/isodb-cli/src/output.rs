//! Rendering of query results as table, JSON or CSV.
//!
//! All three formats are driven by the mapping-style record view, so a field
//! that is absent on a particular record renders as empty rather than
//! panicking or inventing a value.

use crate::args::OutputFormat;
use isodb_core::IsoRecord;

/// Render `records` in the requested format.
///
/// `fields` restricts and orders the emitted columns; unknown names are
/// ignored. With no results the table and CSV formats print a short notice,
/// JSON an empty array.
pub fn render<R: IsoRecord>(
    records: &[&R],
    format: OutputFormat,
    fields: Option<&[String]>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => {
            if records.is_empty() {
                return Ok(String::new());
            }
            Ok(render_csv(records, &headers(records, fields)))
        }
        OutputFormat::Table => {
            if records.is_empty() {
                return Ok("No results found.".to_owned());
            }
            Ok(render_table(records, &headers(records, fields)))
        }
    }
}

/// Columns to emit: the requested projection, or every schema field present
/// on at least one record.
fn headers<R: IsoRecord>(records: &[&R], fields: Option<&[String]>) -> Vec<&'static str> {
    match fields {
        Some(wanted) => wanted
            .iter()
            .filter_map(|name| {
                R::FIELDS
                    .iter()
                    .copied()
                    .find(|field| field == &name.as_str())
            })
            .collect(),
        None => R::FIELDS
            .iter()
            .copied()
            .filter(|field| records.iter().any(|record| record.has_field(field)))
            .collect(),
    }
}

fn render_csv<R: IsoRecord>(records: &[&R], headers: &[&'static str]) -> String {
    let mut lines = vec![headers.join(",")];
    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|&field| record.field(field).unwrap_or("").replace(',', ";"))
            .collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn render_table<R: IsoRecord>(records: &[&R], headers: &[&'static str]) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|&field| field.chars().count())
        .collect();
    for record in records {
        for (col, &field) in headers.iter().enumerate() {
            let len = record.field(field).unwrap_or("").chars().count();
            widths[col] = widths[col].max(len);
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(col, field)| pad(field, widths[col]))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(header_line.clone());
    lines.push("-".repeat(header_line.chars().count()));

    for record in records {
        let row = headers
            .iter()
            .enumerate()
            .map(|(col, &field)| pad(record.field(field).unwrap_or(""), widths[col]))
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(row);
    }

    lines.join("\n")
}

fn pad(value: &str, width: usize) -> String {
    let mut out = value.to_owned();
    for _ in value.chars().count()..width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    impl IsoRecord for Row {
        const STANDARD: &'static str = "test";
        const FIELDS: &'static [&'static str] = &["code", "note"];

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "code" => Some(&self.code),
                "note" => self.note.as_deref(),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                code: "AA".into(),
                note: Some("first, best".into()),
            },
            Row {
                code: "BB".into(),
                note: None,
            },
        ]
    }

    #[test]
    fn table_pads_columns_and_blanks_absent_fields() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let out = render(&refs, OutputFormat::Table, None).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "code | note       ");
        assert!(lines[3].starts_with("BB   | "));
    }

    #[test]
    fn csv_escapes_commas() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let out = render(&refs, OutputFormat::Csv, None).unwrap();
        assert_eq!(out.lines().nth(1), Some("AA,first; best"));
    }

    #[test]
    fn fields_projection_orders_and_filters() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let fields = vec!["note".to_owned(), "bogus".to_owned(), "code".to_owned()];
        let out = render(&refs, OutputFormat::Csv, Some(&fields)).unwrap();
        assert!(out.starts_with("note,code"));
    }

    #[test]
    fn empty_results() {
        let refs: Vec<&Row> = Vec::new();
        let table = render(&refs, OutputFormat::Table, None).unwrap();
        assert_eq!(table, "No results found.");
        let json = render(&refs, OutputFormat::Json, None).unwrap();
        assert_eq!(json, "[]");
    }
}

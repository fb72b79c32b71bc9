// crates/isodb-core/src/index.rs

//! Derived per-field lookup tables.
//!
//! An index is built once per (dataset, field) pair on first use and is
//! immutable afterwards. It is purely an optimization: every table must
//! agree with a linear scan of the record list for the same predicate.

use crate::record::IsoRecord;
use log::debug;
use std::collections::HashMap;

/// Position tables for one field of one dataset.
///
/// Positions are indices into the dataset's record vector, so the index
/// never owns record data and stays valid for the dataset's lifetime.
pub(crate) struct FieldIndex {
    /// Field value → earliest dataset position carrying it.
    pub first: HashMap<String, usize>,
    /// Field value → every dataset position carrying it, in dataset order.
    pub groups: HashMap<String, Vec<usize>>,
    /// Positions ordered by field value; ties keep dataset order.
    /// Records on which the field is absent do not appear.
    pub sorted: Vec<usize>,
}

impl FieldIndex {
    pub fn build<R: IsoRecord>(records: &[R], field: &'static str) -> Self {
        let mut first = HashMap::new();
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        let mut sorted = Vec::with_capacity(records.len());

        for (pos, record) in records.iter().enumerate() {
            let Some(value) = record.field(field) else {
                continue;
            };
            first.entry(value.to_owned()).or_insert(pos);
            groups.entry(value.to_owned()).or_default().push(pos);
            sorted.push(pos);
        }

        // Stable sort: equal values stay in dataset order.
        sorted.sort_by(|&a, &b| records[a].field(field).cmp(&records[b].field(field)));

        debug!(
            "built index for {}.{}: {} values over {} records",
            R::STANDARD,
            field,
            groups.len(),
            sorted.len()
        );

        FieldIndex {
            first,
            groups,
            sorted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        code: String,
        kind: Option<String>,
    }

    impl IsoRecord for Row {
        const STANDARD: &'static str = "test";
        const FIELDS: &'static [&'static str] = &["code", "kind"];

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "code" => Some(&self.code),
                "kind" => self.kind.as_deref(),
                _ => None,
            }
        }
    }

    fn row(code: &str, kind: Option<&str>) -> Row {
        Row {
            code: code.into(),
            kind: kind.map(str::to_owned),
        }
    }

    #[test]
    fn first_wins_on_duplicates() {
        let rows = vec![row("b", Some("x")), row("a", Some("x")), row("b", None)];
        let idx = FieldIndex::build(&rows, "code");
        assert_eq!(idx.first["b"], 0);
        assert_eq!(idx.groups["b"], vec![0, 2]);
        assert_eq!(idx.sorted, vec![1, 0, 2]);
    }

    #[test]
    fn absent_fields_are_skipped() {
        let rows = vec![row("a", None), row("b", Some("x"))];
        let idx = FieldIndex::build(&rows, "kind");
        assert_eq!(idx.sorted, vec![1]);
        assert!(!idx.first.contains_key("a"));
    }
}

// crates/isodb-core/src/dataset.rs

//! The record store and its query surface.

use crate::error::{Error, Result};
use crate::index::FieldIndex;
use crate::record::IsoRecord;
use crate::text::fold_key;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// An immutable, ordered collection of records for one ISO standard, plus
/// the lazily built per-field indices that back `find` and the `by_*` views.
///
/// Record order is the order of appearance in the bundled source file and is
/// fixed for the process lifetime. Indices are derived, never authoritative:
/// every indexed lookup agrees with a linear scan of [`Dataset::items`].
///
/// Lookup criteria are name/value pairs. All supplied pairs must match
/// (logical AND), and criteria are validated against the dataset schema
/// before any matching happens.
pub struct Dataset<R: IsoRecord> {
    records: Vec<R>,
    indices: RwLock<HashMap<&'static str, Arc<FieldIndex>>>,
}

impl<R: IsoRecord> Dataset<R> {
    pub(crate) fn new(records: Vec<R>) -> Self {
        Dataset {
            records,
            indices: RwLock::new(HashMap::new()),
        }
    }

    /// Upstream standard key, e.g. `"3166-1"`.
    pub fn standard(&self) -> &'static str {
        R::STANDARD
    }

    /// The full record sequence in dataset order.
    pub fn items(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// First record whose fields equal all supplied criteria, in dataset
    /// order.
    ///
    /// Single-criterion calls consult the field index, building it on first
    /// use; calls with several criteria fall back to one deterministic
    /// linear scan. `Ok(None)` means no record matched — an expected
    /// outcome, not an error.
    pub fn get(&self, criteria: &[(&str, &str)]) -> Result<Option<&R>> {
        self.find(criteria)
    }

    /// Indexed form of [`Dataset::get`]: O(1) average for a single equality
    /// criterion once the field's index exists. Semantics are identical,
    /// including the earliest-in-dataset-order tie-break when several
    /// records share the indexed value.
    pub fn find(&self, criteria: &[(&str, &str)]) -> Result<Option<&R>> {
        let criteria = self.validate(criteria)?;

        if let [(field, value)] = criteria[..] {
            let index = self.index(field);
            return Ok(index.first.get(value).map(|&pos| &self.records[pos]));
        }

        Ok(self
            .records
            .iter()
            .find(|record| matches_all(*record, &criteria)))
    }

    /// All records whose fields contain the supplied terms as substrings,
    /// compared case- and accent-insensitively, in dataset order.
    ///
    /// Multiple criteria AND together. A record on which a searched field is
    /// absent never matches a non-empty term. No match is an empty vector,
    /// not an error.
    pub fn search(&self, criteria: &[(&str, &str)]) -> Result<Vec<&R>> {
        self.search_impl(criteria, false)
    }

    /// Like [`Dataset::search`] but the folded comparison is full-string
    /// equality instead of a substring test.
    pub fn search_exact(&self, criteria: &[(&str, &str)]) -> Result<Vec<&R>> {
        self.search_impl(criteria, true)
    }

    fn search_impl(&self, criteria: &[(&str, &str)], exact: bool) -> Result<Vec<&R>> {
        let criteria = self.validate(criteria)?;
        let folded: Vec<(&'static str, String)> = criteria
            .iter()
            .map(|&(field, value)| (field, fold_key(value)))
            .collect();

        Ok(self
            .records
            .iter()
            .filter(|record| {
                folded.iter().all(|(field, term)| {
                    record.field(field).is_some_and(|value| {
                        let value = fold_key(value);
                        if exact {
                            value == *term
                        } else {
                            value.contains(term.as_str())
                        }
                    })
                })
            })
            .collect())
    }

    /// `(value, record)` pairs sorted by the value of `field`.
    ///
    /// Duplicate values yield one pair per record, ties staying in dataset
    /// order; records on which the field is absent are omitted.
    pub fn by_field(&self, field: &str) -> Result<Vec<(&str, &R)>> {
        let field = self.resolve_field(field)?;
        Ok(self.sorted_view(field))
    }

    /// Grouped form of [`Dataset::by_field`] for non-unique fields:
    /// `(value, records)` pairs sorted by value.
    pub fn by_field_groups(&self, field: &str) -> Result<Vec<(&str, Vec<&R>)>> {
        let field = self.resolve_field(field)?;
        Ok(self.grouped_view(field))
    }

    /// Mapping form of [`Dataset::by_field`]: field value → records carrying
    /// it, for O(1) access rather than ordered iteration.
    pub fn by_field_dict(&self, field: &str) -> Result<HashMap<&str, Vec<&R>>> {
        let field = self.resolve_field(field)?;
        Ok(self.dict_view(field))
    }

    pub(crate) fn sorted_view(&self, field: &'static str) -> Vec<(&str, &R)> {
        let index = self.index(field);
        index
            .sorted
            .iter()
            .filter_map(|&pos| {
                let record = &self.records[pos];
                record.field(field).map(|value| (value, record))
            })
            .collect()
    }

    pub(crate) fn grouped_view(&self, field: &'static str) -> Vec<(&str, Vec<&R>)> {
        let index = self.index(field);
        let mut out: Vec<(&str, Vec<&R>)> = Vec::new();
        for &pos in &index.sorted {
            let record = &self.records[pos];
            let Some(value) = record.field(field) else {
                continue;
            };
            match out.last_mut() {
                Some((current, group)) if *current == value => group.push(record),
                _ => out.push((value, vec![record])),
            }
        }
        out
    }

    pub(crate) fn dict_view(&self, field: &'static str) -> HashMap<&str, Vec<&R>> {
        let index = self.index(field);
        let mut out = HashMap::with_capacity(index.groups.len());
        for positions in index.groups.values() {
            let Some(&head) = positions.first() else {
                continue;
            };
            let Some(value) = self.records[head].field(field) else {
                continue;
            };
            out.insert(
                value,
                positions.iter().map(|&pos| &self.records[pos]).collect(),
            );
        }
        out
    }

    /// Earliest record with `field == value`, bypassing criteria validation.
    /// For crate-internal callers that pass schema constants.
    pub(crate) fn first_by(&self, field: &'static str, value: &str) -> Option<&R> {
        let index = self.index(field);
        index.first.get(value).map(|&pos| &self.records[pos])
    }

    /// Fetch or build the index for `field`.
    ///
    /// Concurrent first access may build the index more than once; the first
    /// published table wins and losing builders adopt it. Readers only ever
    /// observe a fully built index.
    fn index(&self, field: &'static str) -> Arc<FieldIndex> {
        {
            let cache = self.indices.read().unwrap_or_else(|e| e.into_inner());
            if let Some(index) = cache.get(field) {
                return Arc::clone(index);
            }
        }

        let built = Arc::new(FieldIndex::build(&self.records, field));
        let mut cache = self.indices.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(cache.entry(field).or_insert(built))
    }

    fn validate<'c>(&self, criteria: &[(&'c str, &'c str)]) -> Result<Vec<(&'static str, &'c str)>> {
        if criteria.is_empty() {
            return Err(Error::EmptyCriteria);
        }
        criteria
            .iter()
            .map(|&(field, value)| Ok((self.resolve_field(field)?, value)))
            .collect()
    }

    fn resolve_field(&self, name: &str) -> Result<&'static str> {
        R::FIELDS
            .iter()
            .copied()
            .find(|&field| field == name)
            .ok_or_else(|| Error::UnknownField {
                field: name.to_owned(),
                standard: R::STANDARD,
            })
    }
}

fn matches_all<R: IsoRecord>(record: &R, criteria: &[(&'static str, &str)]) -> bool {
    criteria
        .iter()
        .all(|&(field, value)| record.field(field) == Some(value))
}

impl<'a, R: IsoRecord> IntoIterator for &'a Dataset<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

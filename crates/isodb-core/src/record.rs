// crates/isodb-core/src/record.rs

use serde::de::DeserializeOwned;
use serde::Serialize;

/// One record of an ISO dataset, exposed both through its typed fields and
/// through a mapping-style view.
///
/// Implementors are plain structs whose public fields mirror the upstream
/// JSON schema; [`IsoRecord::field`] reads those same fields by name, so the
/// two access styles can never diverge. A field that is part of the schema
/// but absent on a particular record yields `None`, never a fabricated
/// default.
///
/// # Examples
/// ```no_run
/// use isodb_core::IsoRecord;
///
/// let countries = isodb_core::countries()?;
/// let de = countries.find(&[("alpha_2", "DE")])?.unwrap();
///
/// // Named-field access and mapping-style access read the same store.
/// assert_eq!(de.alpha_3, "DEU");
/// assert_eq!(de.field("alpha_3"), Some("DEU"));
/// # Ok::<(), isodb_core::Error>(())
/// ```
pub trait IsoRecord:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Upstream standard key, e.g. `"3166-1"`. Names the bundled data file.
    const STANDARD: &'static str;

    /// Full dataset schema: every field name a record of this dataset may
    /// carry, in the upstream's (alphabetical) key order.
    const FIELDS: &'static [&'static str];

    /// Mapping-style access: the value of `name` on this record, or `None`
    /// when the field is absent here or unknown to the schema.
    fn field(&self, name: &str) -> Option<&str>;

    /// Iterate the `(field, value)` pairs present on this record, in schema
    /// order.
    fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::FIELDS
            .iter()
            .filter_map(move |&name| self.field(name).map(|value| (name, value)))
    }

    /// Number of fields present on this record.
    fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// Containment test for the mapping-style view.
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

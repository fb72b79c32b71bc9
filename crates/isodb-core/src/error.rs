// crates/isodb-core/src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenient result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the isodb-core crate.
///
/// Load failures are fatal: the bundled snapshot is static data, so a missing
/// or corrupt file cannot be recovered by retrying. Query-time "no match" is
/// not an error; `get`/`find` return `Ok(None)` and `search` returns an empty
/// vector instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Bundled data file for a standard is missing.
    #[error("bundled dataset for ISO {standard} not found at {}: {source}", path.display())]
    DataNotFound {
        standard: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bundled data file exists but cannot be parsed.
    #[error("bundled dataset for ISO {standard} is malformed: {source}")]
    DataMalformed {
        standard: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A lookup was invoked with zero criteria.
    #[error("no lookup criteria supplied")]
    EmptyCriteria,

    /// A criterion names a field that is not part of the dataset schema.
    #[error("unknown field `{field}` for ISO {standard}")]
    UnknownField {
        field: String,
        standard: &'static str,
    },

    /// `get_former_names_info` was called with a name missing from the table.
    #[error("`{name}` is not a known former country name")]
    UnknownFormerName { name: String },
}

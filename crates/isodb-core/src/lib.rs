// crates/isodb-core/src/lib.rs

//! Lookup and search over bundled ISO reference data.
//!
//! One [`Dataset`] per standard — countries (3166-1), subdivisions (3166-2),
//! former countries (3166-3), languages (639-2/-3/-5), currencies (4217) and
//! script names (15924) — loaded lazily from the vendored iso-codes snapshot
//! and cached for the process lifetime. Lookups go through per-field indices
//! built on first use; records expose both typed fields and a mapping-style
//! view.
//!
//! ```no_run
//! let countries = isodb_core::countries()?;
//!
//! let de = countries.get(&[("alpha_2", "DE")])?.unwrap();
//! assert_eq!(de.name, "Germany");
//!
//! let islands = countries.search(&[("name", "Island")])?;
//! assert!(islands.iter().any(|c| c.alpha_2 == "BV"));
//!
//! let eswatini = countries.get_by_former_name("Swaziland").unwrap();
//! assert_eq!(eswatini.alpha_2, "SZ");
//! # Ok::<(), isodb_core::Error>(())
//! ```

pub mod dataset;
pub mod error;
pub mod former_names;
pub mod loader;
pub mod model;
pub mod record;
pub mod text;
mod views;

mod index;

// Re-exports
pub use crate::dataset::Dataset;
pub use crate::error::{Error, Result};
pub use crate::former_names::{FormerNameEntry, FORMER_NAMES};
pub use crate::loader::{
    countries, currencies, default_data_dir, extended_languages, former_countries,
    language_families, languages, script_names, subdivisions,
};
pub use crate::model::{
    Country, Currency, ExtendedLanguage, FormerCountry, Language, LanguageFamily, ScriptName,
    Subdivision,
};
pub use crate::record::IsoRecord;
pub use crate::text::{equals_folded, fold_key};
pub use crate::views::{
    Countries, Currencies, ExtendedLanguages, FormerCountries, LanguageFamilies, Languages,
    ScriptNames, Subdivisions,
};

// crates/isodb-core/src/loader.rs

//! # Data loader
//!
//! Reads the bundled iso-codes JSON snapshot (one file per standard) and
//! caches one [`Dataset`] per standard for the process lifetime. Loading is
//! idempotent: the first successful parse is published and every later call
//! returns the same cached dataset.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::model::{
    Country, Currency, ExtendedLanguage, FormerCountry, Language, LanguageFamily, ScriptName,
    Subdivision,
};
use crate::record::IsoRecord;
use crate::views::{
    Countries, Currencies, ExtendedLanguages, FormerCountries, LanguageFamilies, Languages,
    ScriptNames, Subdivisions,
};
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

static COUNTRIES: OnceCell<Countries> = OnceCell::new();
static SUBDIVISIONS: OnceCell<Subdivisions> = OnceCell::new();
static FORMER_COUNTRIES: OnceCell<FormerCountries> = OnceCell::new();
static LANGUAGES: OnceCell<Languages> = OnceCell::new();
static EXTENDED_LANGUAGES: OnceCell<ExtendedLanguages> = OnceCell::new();
static LANGUAGE_FAMILIES: OnceCell<LanguageFamilies> = OnceCell::new();
static CURRENCIES: OnceCell<Currencies> = OnceCell::new();
static SCRIPT_NAMES: OnceCell<ScriptNames> = OnceCell::new();

/// Directory holding the bundled snapshot files.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

impl<R: IsoRecord> Dataset<R> {
    /// Parse the bundled source file for this standard into a fresh dataset.
    ///
    /// The per-standard accessors ([`countries`] and friends) wrap this in a
    /// process-wide cache; call this directly only when an independent
    /// instance is wanted.
    pub fn load() -> Result<Self> {
        let path = default_data_dir().join(format!("iso_{}.json", R::STANDARD));

        let file = File::open(&path).map_err(|source| Error::DataNotFound {
            standard: R::STANDARD,
            path: path.clone(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut envelope: HashMap<String, Vec<R>> =
            serde_json::from_reader(reader).map_err(|source| Error::DataMalformed {
                standard: R::STANDARD,
                source,
            })?;

        let records = envelope
            .remove(R::STANDARD)
            .ok_or_else(|| Error::DataMalformed {
                standard: R::STANDARD,
                source: <serde_json::Error as serde::de::Error>::custom(format!(
                    "missing `{}` key",
                    R::STANDARD
                )),
            })?;

        debug!(
            "loaded {} records for ISO {} from {}",
            records.len(),
            R::STANDARD,
            path.display()
        );

        Ok(Dataset::new(records))
    }
}

macro_rules! dataset_accessor {
    ($(#[$doc:meta])* $name:ident, $cell:ident, $record:ty) => {
        $(#[$doc])*
        pub fn $name() -> Result<&'static Dataset<$record>> {
            $cell.get_or_try_init(Dataset::load)
        }
    };
}

dataset_accessor!(
    /// Countries (ISO 3166-1). Loaded from the bundled snapshot on first
    /// call, cached for the process lifetime.
    countries, COUNTRIES, Country
);
dataset_accessor!(
    /// Country subdivisions (ISO 3166-2).
    subdivisions, SUBDIVISIONS, Subdivision
);
dataset_accessor!(
    /// Former countries (ISO 3166-3).
    former_countries, FORMER_COUNTRIES, FormerCountry
);
dataset_accessor!(
    /// Languages (ISO 639-2).
    languages, LANGUAGES, Language
);
dataset_accessor!(
    /// Individual languages (ISO 639-3).
    extended_languages, EXTENDED_LANGUAGES, ExtendedLanguage
);
dataset_accessor!(
    /// Language families and groups (ISO 639-5).
    language_families, LANGUAGE_FAMILIES, LanguageFamily
);
dataset_accessor!(
    /// Currencies (ISO 4217).
    currencies, CURRENCIES, Currency
);
dataset_accessor!(
    /// Script names (ISO 15924).
    script_names, SCRIPT_NAMES, ScriptName
);

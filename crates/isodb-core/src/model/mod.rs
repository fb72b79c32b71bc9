// crates/isodb-core/src/model/mod.rs

//! Record types, one per ISO standard.
//!
//! Each struct mirrors the upstream JSON schema: mandatory upstream fields
//! are `String`, optional ones `Option<String>`. The structs are the single
//! backing store for both access styles — named fields directly, and the
//! mapping-style view via [`crate::IsoRecord`].

mod country;
mod currency;
mod language;
mod script;
mod subdivision;

pub use country::{Country, FormerCountry};
pub use currency::Currency;
pub use language::{ExtendedLanguage, Language, LanguageFamily};
pub use script::ScriptName;
pub use subdivision::Subdivision;

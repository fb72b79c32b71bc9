// crates/isodb-core/src/model/language.rs

use crate::record::IsoRecord;
use serde::{Deserialize, Serialize};

/// A language (ISO 639-2).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Terminology code (e.g. `deu`).
    pub alpha_3: String,
    pub name: String,
    /// Two-letter 639-1 code, where one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_2: Option<String>,
    /// Bibliographic code, where it differs from the terminology code
    /// (e.g. `ger` for `deu`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibliographic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

impl IsoRecord for Language {
    const STANDARD: &'static str = "639-2";
    const FIELDS: &'static [&'static str] =
        &["alpha_2", "alpha_3", "bibliographic", "common_name", "name"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "alpha_2" => self.alpha_2.as_deref(),
            "alpha_3" => Some(&self.alpha_3),
            "bibliographic" => self.bibliographic.as_deref(),
            "common_name" => self.common_name.as_deref(),
            "name" => Some(&self.name),
            _ => None,
        }
    }
}

/// An individual language (ISO 639-3), with scope and type classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedLanguage {
    pub alpha_3: String,
    pub name: String,
    /// `I`ndividual, `M`acrolanguage or `S`pecial.
    pub scope: String,
    /// `L`iving, `E`xtinct, `A`ncient, `H`istorical, `C`onstructed or
    /// `S`pecial.
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverted_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibliographic: Option<String>,
}

impl IsoRecord for ExtendedLanguage {
    const STANDARD: &'static str = "639-3";
    const FIELDS: &'static [&'static str] = &[
        "alpha_2",
        "alpha_3",
        "bibliographic",
        "common_name",
        "inverted_name",
        "name",
        "scope",
        "type",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "alpha_2" => self.alpha_2.as_deref(),
            "alpha_3" => Some(&self.alpha_3),
            "bibliographic" => self.bibliographic.as_deref(),
            "common_name" => self.common_name.as_deref(),
            "inverted_name" => self.inverted_name.as_deref(),
            "name" => Some(&self.name),
            "scope" => Some(&self.scope),
            "type" => Some(&self.r#type),
            _ => None,
        }
    }
}

/// A language family or group (ISO 639-5).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFamily {
    pub alpha_3: String,
    pub name: String,
}

impl IsoRecord for LanguageFamily {
    const STANDARD: &'static str = "639-5";
    const FIELDS: &'static [&'static str] = &["alpha_3", "name"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "alpha_3" => Some(&self.alpha_3),
            "name" => Some(&self.name),
            _ => None,
        }
    }
}

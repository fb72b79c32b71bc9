// crates/isodb-core/src/model/country.rs

use crate::record::IsoRecord;
use serde::{Deserialize, Serialize};

/// A current country (ISO 3166-1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub alpha_2: String,
    pub alpha_3: String,
    pub flag: String,
    pub name: String,
    pub numeric: String,
    /// Full official name, where it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,
    /// Everyday short name, where upstream records one (e.g. "Bolivia").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

impl IsoRecord for Country {
    const STANDARD: &'static str = "3166-1";
    const FIELDS: &'static [&'static str] = &[
        "alpha_2",
        "alpha_3",
        "common_name",
        "flag",
        "name",
        "numeric",
        "official_name",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "alpha_2" => Some(&self.alpha_2),
            "alpha_3" => Some(&self.alpha_3),
            "common_name" => self.common_name.as_deref(),
            "flag" => Some(&self.flag),
            "name" => Some(&self.name),
            "numeric" => Some(&self.numeric),
            "official_name" => self.official_name.as_deref(),
            _ => None,
        }
    }
}

/// A former country (ISO 3166-3): codes withdrawn from 3166-1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormerCountry {
    pub alpha_2: String,
    pub alpha_3: String,
    /// Four-letter code: former alpha-2 plus successor alpha-2, or `XX`
    /// when no single successor exists (e.g. `BUMM`, `CSHH`).
    pub alpha_4: String,
    pub name: String,
    pub withdrawal_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl IsoRecord for FormerCountry {
    const STANDARD: &'static str = "3166-3";
    const FIELDS: &'static [&'static str] = &[
        "alpha_2",
        "alpha_3",
        "alpha_4",
        "comment",
        "name",
        "numeric",
        "withdrawal_date",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "alpha_2" => Some(&self.alpha_2),
            "alpha_3" => Some(&self.alpha_3),
            "alpha_4" => Some(&self.alpha_4),
            "comment" => self.comment.as_deref(),
            "name" => Some(&self.name),
            "numeric" => self.numeric.as_deref(),
            "withdrawal_date" => Some(&self.withdrawal_date),
            _ => None,
        }
    }
}

// crates/isodb-core/src/model/subdivision.rs

use crate::record::IsoRecord;
use serde::{Deserialize, Serialize};

/// A country subdivision (ISO 3166-2): state, province, region, ...
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
    /// Full code, country prefix included (e.g. `US-CA`).
    pub code: String,
    pub name: String,
    /// Subdivision category as upstream records it (`State`, `Province`,
    /// `Region`, `Land`, ...).
    pub r#type: String,
    /// Code of the parent subdivision, for second-level entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl IsoRecord for Subdivision {
    const STANDARD: &'static str = "3166-2";
    const FIELDS: &'static [&'static str] = &["code", "name", "parent", "type"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "code" => Some(&self.code),
            "name" => Some(&self.name),
            "parent" => self.parent.as_deref(),
            "type" => Some(&self.r#type),
            _ => None,
        }
    }
}

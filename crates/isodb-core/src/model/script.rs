// crates/isodb-core/src/model/script.rs

use crate::record::IsoRecord;
use serde::{Deserialize, Serialize};

/// A writing-system name (ISO 15924).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptName {
    /// Four-letter code, title-cased (e.g. `Latn`).
    pub alpha_4: String,
    pub name: String,
    pub numeric: String,
}

impl IsoRecord for ScriptName {
    const STANDARD: &'static str = "15924";
    const FIELDS: &'static [&'static str] = &["alpha_4", "name", "numeric"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "alpha_4" => Some(&self.alpha_4),
            "name" => Some(&self.name),
            "numeric" => Some(&self.numeric),
            _ => None,
        }
    }
}

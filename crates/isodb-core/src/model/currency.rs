// crates/isodb-core/src/model/currency.rs

use crate::record::IsoRecord;
use serde::{Deserialize, Serialize};

/// A currency (ISO 4217).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub alpha_3: String,
    pub name: String,
    pub numeric: String,
}

impl IsoRecord for Currency {
    const STANDARD: &'static str = "4217";
    const FIELDS: &'static [&'static str] = &["alpha_3", "name", "numeric"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "alpha_3" => Some(&self.alpha_3),
            "name" => Some(&self.name),
            "numeric" => Some(&self.numeric),
            _ => None,
        }
    }
}

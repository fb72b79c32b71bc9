// crates/isodb-core/src/former_names.rs

//! Historical country names and their present-day resolution.
//!
//! The table below is hand-maintained: it layers renames and dissolutions on
//! top of the ISO 3166-3 dataset, including pre-1974 name changes that ISO
//! never assigned codes for. Keys are case-sensitive historical names; each
//! name maps to exactly one entry.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::model::Country;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// One historical country name, with either the codes/name it resolves to
/// today or the metadata of its dissolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormerNameEntry {
    /// The historical name, as once in use (case-sensitive key).
    pub former_name: &'static str,
    /// Alpha-2 code recorded at change time. For plain renames this is the
    /// still-valid code; for 3166-3 entries it is the withdrawn one. Absent
    /// when the country dissolved without a successor, or predates ISO 3166.
    pub alpha_2: Option<&'static str>,
    pub alpha_3: Option<&'static str>,
    /// Present-day ISO 3166-1 name of the successor, where one exists.
    pub current_name: Option<&'static str>,
    /// Date the change took effect (renames) or the codes were withdrawn.
    pub change_date: &'static str,
    pub comment: &'static str,
}

impl FormerNameEntry {
    /// True when the entry points at a present-day country.
    pub fn has_successor(&self) -> bool {
        self.current_name.is_some()
    }
}

/// All known historical names, in table order.
pub const FORMER_NAMES: &[FormerNameEntry] = &[
    FormerNameEntry {
        former_name: "Swaziland",
        alpha_2: Some("SZ"),
        alpha_3: Some("SWZ"),
        current_name: Some("Eswatini"),
        change_date: "2018-04-19",
        comment: "Name change to Eswatini; codes unchanged",
    },
    FormerNameEntry {
        former_name: "Burma",
        alpha_2: Some("BU"),
        alpha_3: Some("BUR"),
        current_name: Some("Myanmar"),
        change_date: "1989-12-05",
        comment: "Name change to Myanmar; ISO 3166-3 code BUMM",
    },
    FormerNameEntry {
        former_name: "Zaire",
        alpha_2: Some("ZR"),
        alpha_3: Some("ZAR"),
        current_name: Some("Congo, The Democratic Republic of the"),
        change_date: "1997-07-14",
        comment: "Name change to Democratic Republic of the Congo; ISO 3166-3 code ZRCD",
    },
    FormerNameEntry {
        former_name: "Upper Volta",
        alpha_2: Some("HV"),
        alpha_3: Some("HVO"),
        current_name: Some("Burkina Faso"),
        change_date: "1984-08-04",
        comment: "Name change to Burkina Faso; ISO 3166-3 code HVBF",
    },
    FormerNameEntry {
        former_name: "Dahomey",
        alpha_2: Some("DY"),
        alpha_3: Some("DHY"),
        current_name: Some("Benin"),
        change_date: "1975-11-30",
        comment: "Name change to Benin; ISO 3166-3 code DYBJ",
    },
    FormerNameEntry {
        former_name: "New Hebrides",
        alpha_2: Some("NH"),
        alpha_3: Some("NHB"),
        current_name: Some("Vanuatu"),
        change_date: "1980-07-30",
        comment: "Independence as Vanuatu; ISO 3166-3 code NHVU",
    },
    FormerNameEntry {
        former_name: "Southern Rhodesia",
        alpha_2: Some("RH"),
        alpha_3: Some("RHO"),
        current_name: Some("Zimbabwe"),
        change_date: "1980-04-18",
        comment: "Independence as Zimbabwe; ISO 3166-3 code RHZW",
    },
    FormerNameEntry {
        former_name: "The former Yugoslav Republic of Macedonia",
        alpha_2: Some("MK"),
        alpha_3: Some("MKD"),
        current_name: Some("North Macedonia"),
        change_date: "2019-02-14",
        comment: "Name change to North Macedonia under the Prespa agreement; codes unchanged",
    },
    FormerNameEntry {
        former_name: "Cape Verde",
        alpha_2: Some("CV"),
        alpha_3: Some("CPV"),
        current_name: Some("Cabo Verde"),
        change_date: "2013-12-04",
        comment: "Name change to Cabo Verde; codes unchanged",
    },
    FormerNameEntry {
        former_name: "German Democratic Republic",
        alpha_2: Some("DD"),
        alpha_3: Some("DDR"),
        current_name: Some("Germany"),
        change_date: "1990-10-03",
        comment: "German reunification; ISO 3166-3 code DDDE",
    },
    FormerNameEntry {
        former_name: "Ceylon",
        alpha_2: Some("LK"),
        alpha_3: Some("LKA"),
        current_name: Some("Sri Lanka"),
        change_date: "1972-05-22",
        comment: "Name change to Sri Lanka; codes unchanged",
    },
    FormerNameEntry {
        former_name: "Kampuchea",
        alpha_2: Some("KH"),
        alpha_3: Some("KHM"),
        current_name: Some("Cambodia"),
        change_date: "1989-04-30",
        comment: "Name reverted to Cambodia; codes unchanged",
    },
    FormerNameEntry {
        former_name: "British Honduras",
        alpha_2: Some("BZ"),
        alpha_3: Some("BLZ"),
        current_name: Some("Belize"),
        change_date: "1973-06-01",
        comment: "Name change to Belize; codes unchanged",
    },
    FormerNameEntry {
        former_name: "Siam",
        alpha_2: None,
        alpha_3: None,
        current_name: Some("Thailand"),
        change_date: "1949-05-11",
        comment: "Name change to Thailand, predating ISO 3166",
    },
    FormerNameEntry {
        former_name: "Persia",
        alpha_2: None,
        alpha_3: None,
        current_name: Some("Iran, Islamic Republic of"),
        change_date: "1935-03-21",
        comment: "Name change to Iran, predating ISO 3166",
    },
    FormerNameEntry {
        former_name: "Zanzibar",
        alpha_2: None,
        alpha_3: None,
        current_name: Some("Tanzania, United Republic of"),
        change_date: "1964-04-26",
        comment: "Merged with Tanganyika into the United Republic of Tanzania",
    },
    FormerNameEntry {
        former_name: "Czechoslovakia",
        alpha_2: None,
        alpha_3: None,
        current_name: None,
        change_date: "1993-01-01",
        comment: "Dissolved into the Czech Republic (CZ) and Slovakia (SK); ISO 3166-3 code CSHH",
    },
    FormerNameEntry {
        former_name: "Soviet Union",
        alpha_2: None,
        alpha_3: None,
        current_name: None,
        change_date: "1991-12-26",
        comment: "Dissolved into fifteen independent republics; ISO 3166-3 code SUHH",
    },
    FormerNameEntry {
        former_name: "Yugoslavia",
        alpha_2: None,
        alpha_3: None,
        current_name: None,
        change_date: "2003-07-23",
        comment: "Dissolved into successor republics; ISO 3166-3 code YUCS",
    },
    FormerNameEntry {
        former_name: "Serbia and Montenegro",
        alpha_2: None,
        alpha_3: None,
        current_name: None,
        change_date: "2006-06-05",
        comment: "Split into Serbia (RS) and Montenegro (ME); ISO 3166-3 code CSXX",
    },
    FormerNameEntry {
        former_name: "Netherlands Antilles",
        alpha_2: None,
        alpha_3: None,
        current_name: None,
        change_date: "2010-10-10",
        comment: "Dissolved into Bonaire, Sint Eustatius and Saba (BQ), Curaçao (CW) and Sint Maarten (SX); ISO 3166-3 code ANHH",
    },
    FormerNameEntry {
        former_name: "Gilbert and Ellice Islands",
        alpha_2: None,
        alpha_3: None,
        current_name: None,
        change_date: "1979-07-12",
        comment: "Split into Kiribati (KI) and Tuvalu (TV); ISO 3166-3 code GEHH",
    },
];

static BY_NAME: OnceCell<HashMap<&'static str, &'static FormerNameEntry>> = OnceCell::new();

fn table() -> &'static HashMap<&'static str, &'static FormerNameEntry> {
    BY_NAME.get_or_init(|| {
        FORMER_NAMES
            .iter()
            .map(|entry| (entry.former_name, entry))
            .collect()
    })
}

impl Dataset<Country> {
    /// Resolve a historical country name to its present-day record.
    ///
    /// The match is case-sensitive and exact. `None` both for names missing
    /// from the table and for countries that dissolved without a successor;
    /// use [`Dataset::get_former_names_info`] to distinguish the two.
    pub fn get_by_former_name(&self, name: &str) -> Option<&Country> {
        let entry = table().get(name)?;
        if let Some(code) = entry.alpha_2 {
            if let Some(country) = self.first_by("alpha_2", code) {
                return Some(country);
            }
        }
        // Renames recorded with their withdrawn 3166-3 codes (e.g. Burma/BU)
        // resolve through the successor's current name.
        entry
            .current_name
            .and_then(|current| self.first_by("name", current))
    }

    /// The raw table entry for a historical name, successor or not.
    ///
    /// Never fails for a known historical name; an unrecognized name is an
    /// [`Error::UnknownFormerName`], since the caller named an entry it
    /// expected to exist in a finite table.
    pub fn get_former_names_info(&self, name: &str) -> Result<&'static FormerNameEntry> {
        table()
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownFormerName {
                name: name.to_owned(),
            })
    }

    /// Every known historical name, in table order.
    pub fn former_names(&self) -> Vec<&'static str> {
        FORMER_NAMES.iter().map(|entry| entry.former_name).collect()
    }
}

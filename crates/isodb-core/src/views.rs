// crates/isodb-core/src/views.rs

//! Per-dataset convenience surface: the `by_<field>` sorted views, their
//! `_dict` mapping forms, and the `(key, name)` enumeration, for each
//! dataset's natural key fields.

use crate::dataset::Dataset;
use crate::model::{
    Country, Currency, ExtendedLanguage, FormerCountry, Language, LanguageFamily, ScriptName,
    Subdivision,
};
use std::collections::HashMap;

/// The ISO 3166-1 dataset.
pub type Countries = Dataset<Country>;
/// The ISO 3166-2 dataset.
pub type Subdivisions = Dataset<Subdivision>;
/// The ISO 3166-3 dataset.
pub type FormerCountries = Dataset<FormerCountry>;
/// The ISO 639-2 dataset.
pub type Languages = Dataset<Language>;
/// The ISO 639-3 dataset.
pub type ExtendedLanguages = Dataset<ExtendedLanguage>;
/// The ISO 639-5 dataset.
pub type LanguageFamilies = Dataset<LanguageFamily>;
/// The ISO 4217 dataset.
pub type Currencies = Dataset<Currency>;
/// The ISO 15924 dataset.
pub type ScriptNames = Dataset<ScriptName>;

macro_rules! dataset_views {
    ($record:ty { $($name:ident, $dict:ident => $field:literal;)+ }) => {
        impl Dataset<$record> {
            $(
                /// `(value, record)` pairs sorted by this field; ties keep
                /// dataset order, records lacking the field are omitted.
                pub fn $name(&self) -> Vec<(&str, &$record)> {
                    self.sorted_view($field)
                }

                /// Mapping form: field value → records carrying it.
                pub fn $dict(&self) -> HashMap<&str, Vec<&$record>> {
                    self.dict_view($field)
                }
            )+
        }
    };
}

dataset_views!(Country {
    by_alpha_2, by_alpha_2_dict => "alpha_2";
    by_alpha_3, by_alpha_3_dict => "alpha_3";
    by_common_name, by_common_name_dict => "common_name";
    by_name, by_name_dict => "name";
    by_numeric, by_numeric_dict => "numeric";
});

dataset_views!(Subdivision {
    by_code, by_code_dict => "code";
    by_name, by_name_dict => "name";
    by_type, by_type_dict => "type";
});

dataset_views!(FormerCountry {
    by_alpha_2, by_alpha_2_dict => "alpha_2";
    by_alpha_3, by_alpha_3_dict => "alpha_3";
    by_alpha_4, by_alpha_4_dict => "alpha_4";
    by_name, by_name_dict => "name";
    by_numeric, by_numeric_dict => "numeric";
    by_withdrawal_date, by_withdrawal_date_dict => "withdrawal_date";
});

dataset_views!(Language {
    by_alpha_3, by_alpha_3_dict => "alpha_3";
    by_name, by_name_dict => "name";
});

dataset_views!(ExtendedLanguage {
    by_alpha_3, by_alpha_3_dict => "alpha_3";
    by_name, by_name_dict => "name";
    by_scope, by_scope_dict => "scope";
    by_type, by_type_dict => "type";
});

dataset_views!(LanguageFamily {
    by_alpha_3, by_alpha_3_dict => "alpha_3";
    by_name, by_name_dict => "name";
});

dataset_views!(Currency {
    by_alpha_3, by_alpha_3_dict => "alpha_3";
    by_name, by_name_dict => "name";
    by_numeric, by_numeric_dict => "numeric";
});

dataset_views!(ScriptName {
    by_alpha_4, by_alpha_4_dict => "alpha_4";
    by_name, by_name_dict => "name";
    by_numeric, by_numeric_dict => "numeric";
});

macro_rules! dataset_names {
    ($record:ty, $key:ident) => {
        impl Dataset<$record> {
            /// `(natural key, name)` pairs in dataset order, for enumeration
            /// and autocomplete.
            pub fn names(&self) -> impl Iterator<Item = (&str, &str)> {
                self.iter().map(|r| (r.$key.as_str(), r.name.as_str()))
            }
        }
    };
}

dataset_names!(Country, alpha_2);
dataset_names!(Subdivision, code);
dataset_names!(FormerCountry, alpha_2);
dataset_names!(Language, alpha_3);
dataset_names!(ExtendedLanguage, alpha_3);
dataset_names!(LanguageFamily, alpha_3);
dataset_names!(Currency, alpha_3);
dataset_names!(ScriptName, alpha_4);

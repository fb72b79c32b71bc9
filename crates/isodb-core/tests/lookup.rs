//! Exact-lookup behavior: criteria validation, AND semantics, index/scan
//! agreement and tie-breaking.

use isodb_core::{Error, IsoRecord};

#[test]
fn get_country_by_name() {
    let countries = isodb_core::countries().unwrap();
    let germany = countries.get(&[("name", "Germany")]).unwrap().unwrap();
    assert_eq!(germany.alpha_2, "DE");
    assert_eq!(germany.alpha_3, "DEU");
    assert_eq!(germany.numeric, "276");
}

#[test]
fn find_country_by_code() {
    let countries = isodb_core::countries().unwrap();
    let us = countries.find(&[("alpha_2", "US")]).unwrap().unwrap();
    assert_eq!(us.name, "United States");
    assert_eq!(us.field("name"), Some("United States"));
}

#[test]
fn lookup_is_case_sensitive() {
    let countries = isodb_core::countries().unwrap();
    assert!(countries.find(&[("alpha_2", "us")]).unwrap().is_none());
}

#[test]
fn no_match_is_none_not_error() {
    let countries = isodb_core::countries().unwrap();
    assert!(countries.get(&[("alpha_2", "ZZ")]).unwrap().is_none());
    assert!(countries.get(&[("name", "")]).unwrap().is_none());
}

#[test]
fn empty_criteria_is_rejected() {
    let countries = isodb_core::countries().unwrap();
    assert!(matches!(countries.get(&[]), Err(Error::EmptyCriteria)));
    assert!(matches!(countries.find(&[]), Err(Error::EmptyCriteria)));
    assert!(matches!(countries.search(&[]), Err(Error::EmptyCriteria)));
}

#[test]
fn unknown_field_is_rejected() {
    let countries = isodb_core::countries().unwrap();
    match countries.get(&[("capital", "Berlin")]) {
        Err(Error::UnknownField { field, standard }) => {
            assert_eq!(field, "capital");
            assert_eq!(standard, "3166-1");
        }
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn multiple_criteria_and_together() {
    let subdivisions = isodb_core::subdivisions().unwrap();
    let hit = subdivisions
        .get(&[("type", "State"), ("code", "US-CA")])
        .unwrap()
        .unwrap();
    assert_eq!(hit.name, "California");

    // Contradictory criteria match nothing.
    assert!(subdivisions
        .get(&[("type", "Province"), ("code", "US-CA")])
        .unwrap()
        .is_none());
}

#[test]
fn find_agrees_with_linear_scan() {
    let countries = isodb_core::countries().unwrap();
    for field in ["alpha_2", "alpha_3", "name", "numeric"] {
        for record in countries.items() {
            let value = record.field(field).unwrap();
            let indexed = countries.find(&[(field, value)]).unwrap().unwrap();
            let scanned = countries
                .iter()
                .find(|r| r.field(field) == Some(value))
                .unwrap();
            assert_eq!(indexed, scanned);
        }
    }
}

#[test]
fn duplicate_values_resolve_to_earliest_record() {
    let subdivisions = isodb_core::subdivisions().unwrap();
    // "Limburg" names both a Belgian and a Dutch province.
    let matches: Vec<_> = subdivisions
        .iter()
        .filter(|s| s.name == "Limburg")
        .collect();
    assert!(matches.len() > 1, "fixture needs a duplicated name");

    let hit = subdivisions.find(&[("name", "Limburg")]).unwrap().unwrap();
    assert_eq!(hit, matches[0]);

    let via_get = subdivisions.get(&[("name", "Limburg")]).unwrap().unwrap();
    assert_eq!(via_get, hit);
}

#[test]
fn repeated_queries_are_idempotent() {
    let countries = isodb_core::countries().unwrap();
    let first = countries.find(&[("alpha_3", "FRA")]).unwrap().unwrap();
    let second = countries.find(&[("alpha_3", "FRA")]).unwrap().unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn datasets_are_cached_singletons() {
    let a = isodb_core::countries().unwrap();
    let b = isodb_core::countries().unwrap();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.len(), 249);
    assert_eq!(a.standard(), "3166-1");
}

#[test]
fn concurrent_first_queries_converge() {
    let countries = isodb_core::countries().unwrap();
    // Several threads race the lazy index build; all must observe the same
    // published result.
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(move || {
                let hit = countries.find(&[("alpha_3", "NLD")]).unwrap().unwrap();
                hit.alpha_2.clone()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "NL");
    }
}

#[test]
fn every_dataset_loads() {
    assert!(!isodb_core::countries().unwrap().is_empty());
    assert!(!isodb_core::subdivisions().unwrap().is_empty());
    assert!(!isodb_core::former_countries().unwrap().is_empty());
    assert!(!isodb_core::languages().unwrap().is_empty());
    assert!(!isodb_core::extended_languages().unwrap().is_empty());
    assert!(!isodb_core::language_families().unwrap().is_empty());
    assert!(!isodb_core::currencies().unwrap().is_empty());
    assert!(!isodb_core::script_names().unwrap().is_empty());
}

#[test]
fn lookups_across_datasets() {
    let languages = isodb_core::languages().unwrap();
    let german = languages.find(&[("alpha_2", "de")]).unwrap().unwrap();
    assert_eq!(german.alpha_3, "deu");
    assert_eq!(german.bibliographic.as_deref(), Some("ger"));

    let currencies = isodb_core::currencies().unwrap();
    let usd = currencies.find(&[("alpha_3", "USD")]).unwrap().unwrap();
    assert_eq!(usd.numeric, "840");

    let scripts = isodb_core::script_names().unwrap();
    let latin = scripts.find(&[("alpha_4", "Latn")]).unwrap().unwrap();
    assert_eq!(latin.numeric, "215");

    let families = isodb_core::language_families().unwrap();
    let germanic = families.find(&[("alpha_3", "gem")]).unwrap().unwrap();
    assert_eq!(germanic.name, "Germanic languages");

    let extended = isodb_core::extended_languages().unwrap();
    let chinese = extended.find(&[("alpha_3", "zho")]).unwrap().unwrap();
    assert_eq!(chinese.scope, "M");

    let former = isodb_core::former_countries().unwrap();
    let burma = former.find(&[("alpha_4", "BUMM")]).unwrap().unwrap();
    assert_eq!(burma.alpha_2, "BU");
    assert_eq!(burma.name, "Burma");
}

//! Substring search: folding, AND semantics, dataset ordering and the exact
//! mode.

use isodb_core::IsoRecord;

#[test]
fn island_search_spans_cases_and_accents() {
    let countries = isodb_core::countries().unwrap();
    let hits = countries.search(&[("name", "Island")]).unwrap();

    let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
    for expected in ["Åland Islands", "Bouvet Island", "Cocos (Keeling) Islands"] {
        assert_eq!(
            names.iter().filter(|n| **n == expected).count(),
            1,
            "{expected} should appear exactly once"
        );
    }

    // Results come back in dataset order.
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| {
            countries
                .iter()
                .position(|c| std::ptr::eq(c, *hit))
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn search_is_case_insensitive() {
    let countries = isodb_core::countries().unwrap();
    let lower = countries.search(&[("name", "island")]).unwrap();
    let upper = countries.search(&[("name", "ISLAND")]).unwrap();
    assert_eq!(lower, upper);
    assert!(!lower.is_empty());
}

#[test]
fn search_folds_accents() {
    let countries = isodb_core::countries().unwrap();
    let hits = countries.search(&[("name", "aland")]).unwrap();
    assert!(hits.iter().any(|c| c.alpha_2 == "AX"));
}

#[test]
fn absent_fields_never_match() {
    let countries = isodb_core::countries().unwrap();
    let hits = countries.search(&[("official_name", "Republic")]).unwrap();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|c| c.official_name.is_some()));
    // Bouvet Island carries no official_name and must not leak in.
    assert!(hits.iter().all(|c| c.alpha_2 != "BV"));
}

#[test]
fn multi_field_search_ands_together() {
    let subdivisions = isodb_core::subdivisions().unwrap();
    let hits = subdivisions
        .search(&[("name", "Sachsen"), ("type", "Land")])
        .unwrap();
    assert!(!hits.is_empty());
    assert!(hits
        .iter()
        .all(|s| s.r#type == "Land" && s.name.to_lowercase().contains("sachsen")));
}

#[test]
fn no_match_is_empty_not_error() {
    let countries = isodb_core::countries().unwrap();
    assert!(countries.search(&[("name", "Xyzzy")]).unwrap().is_empty());
}

#[test]
fn exact_mode_requires_full_equality() {
    let countries = isodb_core::countries().unwrap();

    let substring = countries.search(&[("name", "Germany")]).unwrap();
    assert_eq!(substring.len(), 1);

    let exact = countries.search_exact(&[("name", "germany")]).unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].alpha_2, "DE");

    // A fragment is no longer enough in exact mode.
    assert!(countries.search_exact(&[("name", "German")]).unwrap().is_empty());
}

#[test]
fn search_agrees_with_linear_scan() {
    let currencies = isodb_core::currencies().unwrap();
    let hits = currencies.search(&[("name", "franc")]).unwrap();
    let scanned: Vec<_> = currencies
        .iter()
        .filter(|c| {
            c.field("name")
                .is_some_and(|n| n.to_lowercase().contains("franc"))
        })
        .collect();
    assert_eq!(hits, scanned);
}

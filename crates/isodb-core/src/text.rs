// crates/isodb-core/src/text.rs

//! Text normalization used by the substring search path.

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so matching is both
/// case-insensitive and accent-insensitive.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// # Examples
///
/// ```rust
/// use isodb_core::equals_folded;
///
/// assert!(equals_folded("Åland Islands", "aland islands"));
/// assert!(equals_folded("CURAÇAO", "Curacao"));
/// assert!(!equals_folded("Germany", "France"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold_key("Åland Islands"), "aland islands");
        assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
        assert_eq!(fold_key("TÜRKIYE"), "turkiye");
    }

    #[test]
    fn folded_equality() {
        assert!(equals_folded("Réunion", "REUNION"));
        assert!(!equals_folded("Réunion", "Union"));
    }
}

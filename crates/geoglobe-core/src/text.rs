// crates/geoglobe-core/src/text.rs

/// Convert a string into a folded key suitable for accent-insensitive matching.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2) Normalize to lowercase
///
/// ```rust
/// use geoglobe_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Plain Unicode lowercasing, no transliteration.
pub fn lower_key(s: &str) -> String {
    s.to_lowercase()
}

/// Key used by the country search, depending on whether accents are folded.
#[inline]
pub fn match_key(s: &str, fold_accents: bool) -> String {
    if fold_accents {
        fold_key(s)
    } else {
        lower_key(s)
    }
}

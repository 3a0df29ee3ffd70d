// src/core/text.rs
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold text for locale-insensitive comparison: trim, strip diacritics, uppercase.
///
/// `normalize(normalize(x)) == normalize(x)` for every input.
pub fn normalize(s: &str) -> String {
    // Uppercase first: some uppercase mappings emit combining marks.
    let folded: String = s
        .to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    folded.trim().to_string()
}

/// Normalized whitespace-delimited words, with surrounding punctuation trimmed.
/// `"Cirurgias Programadas (Próximo Dia)"` → `["CIRURGIAS", "PROGRAMADAS", "PROXIMO", "DIA"]`.
pub fn words(s: &str) -> Vec<String> {
    normalize(s)
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_case_and_padding() {
        assert_eq!(normalize("  Transferências/Saídas "), "TRANSFERENCIAS/SAIDAS");
        assert_eq!(normalize("Cirurgias Programadas (Próximo Dia)"), "CIRURGIAS PROGRAMADAS (PROXIMO DIA)");
        assert_eq!(normalize("ATÉ 19H"), "ATE 19H");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["ALTAS DO DIA (ATÉ 19H)", "ﬁ straße", "  ção ", "Ǆ", "ΐ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn words_drop_punctuation() {
        assert_eq!(
            words("Cirurgias Programadas (Próximo Dia)"),
            vec!["CIRURGIAS", "PROGRAMADAS", "PROXIMO", "DIA"]
        );
        assert_eq!(words(" - "), Vec::<String>::new());
    }
}

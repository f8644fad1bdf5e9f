/// True iff `word` is usable as a concordance entry: non-empty, containing
/// only alphanumerics and dots, with at least one letter.
///
/// Rejects pure numeric strings (phone numbers, dotted number sequences)
/// while accepting mixed alphanumerics like "b2b" and dotted abbreviations
/// like "a.k.a". Standalone pre-filter for callers that want to discard
/// noise words; the aggregation pipeline does not apply it.
pub fn is_valid(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    if word.chars().any(|c| !c.is_ascii_alphanumeric() && c != '.') {
        return false;
    }

    word.chars().any(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validations() {
        assert!(!is_valid(""));
        assert!(is_valid("hello"));
        assert!(!is_valid("multiple words"));
        assert!(!is_valid("b@11sh1t"));
        assert!(is_valid("a.k.a"));
        assert!(is_valid("B2B"));
        assert!(!is_valid("0623141258"));
        assert!(!is_valid("06.23.14.12.58"));
    }

    #[test]
    fn test_dots_alone_are_not_enough() {
        assert!(!is_valid("..."));
        assert!(is_valid("a."));
    }
}

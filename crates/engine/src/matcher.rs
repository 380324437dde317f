//! Keyword matching: normalized, exact-equality comparison.
//!
//! Both sides are trimmed and case-folded before comparing. A keyword
//! matches only when it equals the whole message text after normalization;
//! substrings, prefixes, and suffixes never match.

/// Normalize one side of a keyword comparison.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True if any keyword equals `text` after normalization.
///
/// An empty keyword list or blank text never matches; no error is raised.
pub fn matches_keywords(keywords: &[String], text: &str) -> bool {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return false;
    }
    keywords.iter().any(|keyword| normalize(keyword) == normalized)
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn exact_text_matches() {
        assert!(matches_keywords(&keywords(&["hello"]), "hello"));
    }

    #[test]
    fn substring_never_matches() {
        assert!(!matches_keywords(&keywords(&["hello"]), "hello world"));
        assert!(!matches_keywords(&keywords(&["hello world"]), "hello"));
        assert!(!matches_keywords(&keywords(&["ell"]), "hello"));
    }

    #[test]
    fn case_is_folded_on_both_sides() {
        assert!(matches_keywords(&keywords(&["Hello"]), "hELLO"));
        assert!(matches_keywords(&keywords(&["HELLO"]), "hello"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert!(matches_keywords(&keywords(&["hello"]), "  hello\n"));
        assert!(matches_keywords(&keywords(&[" hello "]), "hello"));
    }

    #[test]
    fn interior_whitespace_is_significant() {
        assert!(!matches_keywords(&keywords(&["hello there"]), "hello  there"));
    }

    #[test]
    fn any_keyword_matches() {
        let kw = keywords(&["foo", "bar", "baz"]);
        assert!(matches_keywords(&kw, "bar"));
        assert!(!matches_keywords(&kw, "qux"));
    }

    #[test]
    fn empty_keyword_list_never_matches() {
        assert!(!matches_keywords(&[], "hello"));
    }

    #[test]
    fn blank_text_never_matches() {
        assert!(!matches_keywords(&keywords(&["hello"]), ""));
        assert!(!matches_keywords(&keywords(&["hello"]), "   "));
        // Even a whitespace-only keyword cannot match blank text.
        assert!(!matches_keywords(&keywords(&["  "]), "  "));
    }

    #[test]
    fn unicode_keywords_match_exactly() {
        assert!(matches_keywords(&keywords(&["ありがとう"]), "ありがとう"));
        assert!(!matches_keywords(&keywords(&["ありがとう"]), "ありがとうございます"));
    }
}

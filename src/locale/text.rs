use crate::site::MultiLanguageText;

/// Sentinel language id marking a single universal value
pub const ANY_LANG: &str = "_any";

/// Resolve a multi-language text list for one language.
///
/// If the first entry carries the `_any` sentinel it wins regardless of
/// the requested language; otherwise the first entry with a matching id
/// wins. An empty list or a missing match resolves to an empty string.
pub fn resolve_list(texts: &[MultiLanguageText], lang_id: &str) -> String {
    let Some(first) = texts.first() else {
        return String::new();
    };

    if first.lang_id == ANY_LANG {
        return first.text.clone();
    }

    texts
        .iter()
        .find(|t| t.lang_id == lang_id)
        .map(|t| t.text.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lang_id: &str, text: &str) -> MultiLanguageText {
        MultiLanguageText {
            lang_id: lang_id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_list_resolves_to_empty() {
        assert_eq!(resolve_list(&[], "en"), "");
    }

    #[test]
    fn test_any_sentinel_wins_for_every_language() {
        let texts = vec![text("_any", "Universal"), text("en", "English")];
        assert_eq!(resolve_list(&texts, "en"), "Universal");
        assert_eq!(resolve_list(&texts, "it"), "Universal");
        assert_eq!(resolve_list(&texts, "zz"), "Universal");
    }

    #[test]
    fn test_any_sentinel_only_counts_in_first_position() {
        let texts = vec![text("en", "English"), text("_any", "Universal")];
        assert_eq!(resolve_list(&texts, "it"), "");
    }

    #[test]
    fn test_first_matching_language_wins() {
        let texts = vec![text("en", "Home"), text("it", "Pagina iniziale")];
        assert_eq!(resolve_list(&texts, "it"), "Pagina iniziale");
        assert_eq!(resolve_list(&texts, "en"), "Home");
    }

    #[test]
    fn test_no_match_resolves_to_empty() {
        let texts = vec![text("en", "Home"), text("it", "Pagina iniziale")];
        assert_eq!(resolve_list(&texts, "fr"), "");
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lower-cases `text` and splits it into word tokens.
///
/// A token is a maximal run of alphanumeric or `_` characters; runs shorter
/// than two characters are dropped, so `"children's"` yields `["children"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Unauthorized data-sharing, with THIRD parties."),
            vec!["unauthorized", "data", "sharing", "with", "third", "parties"]
        );
    }

    #[test]
    fn drops_single_character_runs() {
        assert_eq!(
            tokenize("Processing children's data: a b c"),
            vec!["processing", "children", "data"]
        );
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(tokenize("gdpr_art 17 x9"), vec!["gdpr_art", "17", "x9"]);
    }

    #[test]
    fn empty_and_blank_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  .. ! ").is_empty());
    }
}

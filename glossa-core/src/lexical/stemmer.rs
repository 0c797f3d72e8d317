//! Suffix-stripping stemmer

/// Strip one common English suffix.
///
/// Rules are checked in priority order and only the first applicable one
/// fires: `-ing` when the word is longer than 4 characters, `-ed` when
/// longer than 3, `-s` when longer than 2.
pub fn stem(word: &str) -> String {
    let len = word.chars().count();

    // Suffixes are ASCII, so slicing by byte length is safe once matched
    if word.ends_with("ing") && len > 4 {
        word[..word.len() - 3].to_string()
    } else if word.ends_with("ed") && len > 3 {
        word[..word.len() - 2].to_string()
    } else if word.ends_with('s') && len > 2 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ing_suffix() {
        assert_eq!(stem("running"), "runn");
        assert_eq!(stem("stemming"), "stemm");
        // "sing" is too short for the -ing rule and falls through
        assert_eq!(stem("sing"), "sing");
    }

    #[test]
    fn test_ed_suffix() {
        assert_eq!(stem("jumped"), "jump");
        assert_eq!(stem("red"), "red");
    }

    #[test]
    fn test_s_suffix() {
        assert_eq!(stem("runs"), "run");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("things"), "thing");
    }

    #[test]
    fn test_only_one_rule_fires() {
        // -ing wins over nothing else; result is not re-stemmed
        assert_eq!(stem("seeding"), "seed");
        assert_eq!(stem("easily"), "easily");
    }

    #[test]
    fn test_non_ascii_word() {
        assert_eq!(stem("cafés"), "café");
        assert_eq!(stem("é"), "é");
    }
}

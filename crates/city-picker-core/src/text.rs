// crates/city-picker-core/src/text.rs

/// Group used for records whose transliterated key does not start with an
/// ASCII letter.
pub const FALLBACK_GROUP: &str = "#";

/// Derive the alphabet group key for a record.
///
/// The key is the first character of the ASCII transliteration of `spell`
/// (falling back to `name` when `spell` is blank), uppercased. Transliteration
/// uses the `deunicode` crate, so `"Łódź"` lands in `L` and `"北京"` lands
/// in `B`.
///
/// # Examples
///
/// ```rust
/// use city_picker_core::text::group_key;
///
/// assert_eq!(group_key("beijing", "北京"), "B");
/// assert_eq!(group_key("", "Łódź"), "L");
/// assert_eq!(group_key("", "123"), "#");
/// ```
pub fn group_key(spell: &str, name: &str) -> String {
    let source = if spell.trim().is_empty() { name } else { spell };
    deunicode::deunicode(source.trim())
        .chars()
        .find(|c| !c.is_whitespace())
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_else(|| FALLBACK_GROUP.to_string())
}

/// Case-sensitive contiguous substring test used by the search index.
///
/// No folding or normalization is applied; an empty needle never matches
/// here because empty queries are short-circuited before matching.
#[inline]
pub fn contains_exact(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_key_prefers_spell() {
        assert_eq!(group_key("shanghai", "上海"), "S");
        assert_eq!(group_key("  xian", "西安"), "X");
    }

    #[test]
    fn group_key_transliterates_name_when_spell_is_blank() {
        assert_eq!(group_key("", "Zürich"), "Z");
        assert_eq!(group_key("   ", "上海"), "S");
    }

    #[test]
    fn group_key_falls_back_for_non_letters() {
        assert_eq!(group_key("", ""), FALLBACK_GROUP);
        assert_eq!(group_key("42nd street", ""), FALLBACK_GROUP);
    }

    #[test]
    fn contains_exact_is_case_sensitive() {
        assert!(contains_exact("beijing", "jing"));
        assert!(!contains_exact("beijing", "Jing"));
        assert!(!contains_exact("beijing", ""));
    }
}

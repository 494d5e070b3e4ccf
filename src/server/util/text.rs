/// Lowercases with Unicode rules so stored names and queries fold the same way.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Whether `haystack` contains `needle` ignoring case. `needle` is taken literally.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

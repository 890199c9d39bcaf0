//! Case-insensitive keyword matching shared by filters and category rules.

/// Returns true when `needle` occurs in `haystack`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns the first keyword contained in `haystack`, ignoring case.
pub fn find_keyword<'a>(haystack: &str, keywords: &'a [String]) -> Option<&'a str> {
    let lowered = haystack.to_lowercase();
    keywords
        .iter()
        .find(|keyword| lowered.contains(&keyword.to_lowercase()))
        .map(String::as_str)
}

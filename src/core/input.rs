//! Input-acceptance filter applied to raw text from the UI.

/// Normalize raw text into a guess for a word of `max_len` letters.
///
/// Lowercases, drops anything outside `a-z`, and truncates to `max_len`.
///
/// ```
/// use word_reveal::core::accept_input;
///
/// assert_eq!(accept_input("Cr-A n3E!", 5), "crane");
/// assert_eq!(accept_input("BRICKLAYER", 5), "brick");
/// ```
#[must_use]
pub fn accept_input(raw: &str, max_len: usize) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .take(max_len)
        .collect()
}

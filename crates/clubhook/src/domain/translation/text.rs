//! Text helpers for rendered values

/// Uppercase the first letter of every word
///
/// A word starts at the beginning of the string or after any character
/// that is not alphanumeric or `_`. Other characters are left as-is,
/// so "in-progress" becomes "In-Progress" and "QA" stays "QA".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

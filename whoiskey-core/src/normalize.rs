//! Raw WHOIS label normalization.
//!
//! Registries disagree on casing, spacing and the terminator they print
//! after a label (`Domain Name:`, `domain name :`, `Domain Name.......:`).
//! [`normalize`] folds all of those into one comparison key.

/// Characters that terminate a label. The dot covers dot-leader padding.
fn is_terminator(c: char) -> bool {
    matches!(c, ':' | '：' | '.')
}

/// Turns a raw label into its lookup key.
///
/// - trims and collapses internal whitespace runs to a single space
/// - lower-cases ASCII letters
/// - strips the trailing terminator run (`:`, `：`, dot leaders)
///
/// Any other punctuation is kept (`registrant's address`, `e-mail`).
/// Never fails; unusable input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(word);
    }
    key.make_ascii_lowercase();

    let end = key
        .trim_end_matches(|c: char| is_terminator(c) || c == ' ')
        .len();
    key.truncate(end);
    key
}

/// Returns true if `label` is already a fixed point of [`normalize`].
pub fn is_normalized(label: &str) -> bool {
    normalize(label) == label
}

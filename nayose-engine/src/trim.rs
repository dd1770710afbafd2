//! Whitespace trimming for lookup keys.

const IDEOGRAPHIC_SPACE: char = '\u{3000}';
const NO_BREAK_SPACE: char = '\u{00A0}';

/// Space and the C0 control characters, the set a plain trim removes.
#[inline]
fn is_trim_char(c: char) -> bool {
    c <= '\u{20}'
}

#[inline]
fn is_full_trim_char(c: char) -> bool {
    is_trim_char(c) || c == IDEOGRAPHIC_SPACE || c == NO_BREAK_SPACE
}

/// Trim both ends; `None` becomes the empty string.
pub fn trim_to_empty(text: Option<&str>) -> String {
    text.map(|s| s.trim_matches(is_trim_char).to_string())
        .unwrap_or_default()
}

/// Trim both ends, also removing ideographic and no-break spaces.
///
/// Unlike [`trim_to_empty`], `None` stays `None`.
pub fn full_trim(text: Option<&str>) -> Option<String> {
    let text = text?;
    if text.is_empty() {
        return Some(String::new());
    }
    Some(text.trim_matches(is_full_trim_char).to_string())
}

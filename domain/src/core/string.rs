//! String utilities for the domain layer.

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Returns `None` when nothing but whitespace remains, so callers can treat
/// blank titles the same as missing ones.
pub fn collapse_whitespace(s: &str) -> Option<String> {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Shorten a string to at most `max_chars` characters, ending in `…` when cut.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.push('…');
    out
}

use crate::character_sets::{is_ascii_newline, is_trimmable};
use crate::checkers::scheme_len;
use crate::compat::{Cow, String};

/// Fast check if string contains newlines
pub fn has_newline(input: &str) -> bool {
    memchr::memchr2(b'\n', b'\r', input.as_bytes()).is_some()
}

/// Remove every newline character.
/// Returns a Cow to avoid allocation when possible.
pub fn strip_newlines(input: &str) -> Cow<'_, str> {
    if !has_newline(input) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.chars().filter(|&c| !is_ascii_newline(c)).collect())
}

/// Trim whitespace, NUL and vertical tab from both ends of a reference
pub fn trim_reference(input: &str) -> &str {
    input.trim_matches(is_trimmable)
}

/// Collapse `<scheme>://#fragment` to `#fragment`.
///
/// Authors regularly write `http://#anchor` when they mean `#anchor`.
pub fn repair_scheme_fragment(input: &str) -> &str {
    let scheme_end = scheme_len(input.as_bytes());
    if scheme_end > 0 && input[scheme_end..].starts_with("://#") {
        &input[scheme_end + 3..]
    } else {
        input
    }
}

/// Split a reference into everything before the first `?` or `#`, and the
/// query/fragment tail (which keeps its delimiter).
pub fn split_at_query_or_fragment(input: &str) -> (&str, &str) {
    let end = memchr::memchr2(b'?', b'#', input.as_bytes()).unwrap_or(input.len());
    input.split_at(end)
}

/// Turn backslashes into slashes in the scheme, authority and path, the
/// way Chrome does. Query and fragment text is left alone.
pub fn normalize_backslashes(input: &str) -> Cow<'_, str> {
    let (prefix, suffix) = split_at_query_or_fragment(input);
    if memchr::memchr(b'\\', prefix.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len());
    output.push_str(&prefix.replace('\\', "/"));
    output.push_str(suffix);
    Cow::Owned(output)
}

/// Escape literal spaces as `%20` and `$` as `%24`.
///
/// This is not general percent-encoding: a `$` left in an attribute value
/// is mangled by some document serializers.
pub fn escape_space_and_dollar(input: &str) -> Cow<'_, str> {
    if memchr::memchr2(b' ', b'$', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            ' ' => output.push_str("%20"),
            '$' => output.push_str("%24"),
            _ => output.push(c),
        }
    }
    Cow::Owned(output)
}

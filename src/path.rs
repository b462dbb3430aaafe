//! Path merging and dot-segment removal.
//!
//! Removal works on whole-string passes. Each pass applies three rewrites
//! in order, each over the entire path, left to right and without overlap:
//!
//! 1. `//`, `/./` and a trailing `/.` become `/`
//! 2. `/<segment>/../` becomes `/` unless `<segment>` is itself `..`
//! 3. a leading `/..` becomes `/`
//!
//! Passes repeat until one rewrites nothing.

use crate::compat::String;

/// Directory part of a base path: everything before its last `/`.
/// A path without any `/` is returned unchanged.
pub fn parent_directory(path: &str) -> &str {
    path.rfind('/').map_or(path, |pos| &path[..pos])
}

/// Final non-empty segment of a path
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Collapse `.` and `..` segments until nothing more changes.
pub fn remove_dot_segments(path: &str) -> String {
    let mut current = String::from(path);
    // Every productive pass shortens the path by at least one byte
    let max_passes = path.len() + 1;

    for _ in 0..max_passes {
        let (next, rewrites) = collapse_pass(&current);
        if rewrites == 0 {
            return next;
        }
        current = next;
    }

    tracing::debug!(path, "dot segment removal stopped at pass limit");
    current
}

fn collapse_pass(path: &str) -> (String, usize) {
    let (path, a) = collapse_current_dir(path);
    let (path, b) = collapse_parent_dir(&path);
    let (path, c) = collapse_leading_parent(&path);
    (path, a + b + c)
}

/// Rule 1: `//`, `/./` and trailing `/.`
fn collapse_current_dir(path: &str) -> (String, usize) {
    let bytes = path.as_bytes();
    let mut output = String::with_capacity(path.len());
    let mut rewrites = 0;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'/' {
            i += 1;
            continue;
        }
        let matched = match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(b'.'), Some(b'/')) => 3,
            (Some(b'/'), _) => 2,
            (Some(b'.'), None) => 2,
            _ => 0,
        };
        if matched == 0 {
            i += 1;
            continue;
        }
        output.push_str(&path[copied..i]);
        output.push('/');
        rewrites += 1;
        i += matched;
        copied = i;
    }

    output.push_str(&path[copied..]);
    (output, rewrites)
}

/// Rule 2: `/<segment>/../`
fn collapse_parent_dir(path: &str) -> (String, usize) {
    let bytes = path.as_bytes();
    let mut output = String::with_capacity(path.len());
    let mut rewrites = 0;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'/' {
            i += 1;
            continue;
        }
        let segment_start = i + 1;
        let Some(len) = memchr::memchr(b'/', &bytes[segment_start..]) else {
            break;
        };
        let segment_end = segment_start + len;
        let segment = &path[segment_start..segment_end];

        if !segment.is_empty() && segment != ".." && path[segment_end..].starts_with("/../") {
            output.push_str(&path[copied..i]);
            output.push('/');
            rewrites += 1;
            i = segment_end + 4;
            copied = i;
        } else {
            i = segment_end;
        }
    }

    output.push_str(&path[copied..]);
    (output, rewrites)
}

/// Rule 3: leading `/..`
fn collapse_leading_parent(path: &str) -> (String, usize) {
    match path.strip_prefix("/..") {
        Some(rest) => {
            let mut output = String::with_capacity(path.len());
            output.push('/');
            output.push_str(rest);
            (output, 1)
        }
        None => (String::from(path), 0),
    }
}

use crate::character_sets::is_scheme_byte;

/// Length of the leading run of scheme bytes (`[A-Za-z0-9]*`).
pub fn scheme_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| is_scheme_byte(b)).count()
}

/// Length of the leading run of ASCII digits.
/// Returns 0 if the input does not start with a digit.
pub fn port_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of a `<scheme>:/+` prefix, or `None` if the input has no
/// hierarchical scheme. Any number of slashes is accepted so that
/// `http:/host` and `http:///host` read like `http://host`.
pub fn hierarchical_prefix_len(bytes: &[u8]) -> Option<usize> {
    let scheme_end = scheme_len(bytes);
    if scheme_end == 0 || bytes.get(scheme_end) != Some(&b':') {
        return None;
    }
    let slashes = bytes[scheme_end + 1..]
        .iter()
        .take_while(|&&b| b == b'/')
        .count();
    if slashes == 0 {
        return None;
    }
    Some(scheme_end + 1 + slashes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_len() {
        assert_eq!(port_len(b"80"), 2);
        assert_eq!(port_len(b"8080/path"), 4);
        assert_eq!(port_len(b"abc"), 0);
        assert_eq!(port_len(b""), 0);
    }

    #[test]
    fn test_hierarchical_prefix_len() {
        assert_eq!(hierarchical_prefix_len(b"http://example.com"), Some(7));
        assert_eq!(hierarchical_prefix_len(b"http:/example.com"), Some(6));
        assert_eq!(hierarchical_prefix_len(b"http:///example.com"), Some(8));
        assert_eq!(hierarchical_prefix_len(b"HTTP://EXAMPLE.com"), Some(7));

        assert_eq!(hierarchical_prefix_len(b"mailto:user@host"), None);
        assert_eq!(hierarchical_prefix_len(b"://example.com"), None);
        assert_eq!(hierarchical_prefix_len(b"svn+ssh://host"), None);
        assert_eq!(hierarchical_prefix_len(b"/path"), None);
    }
}

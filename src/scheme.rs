/// Check if a scheme is one of the opaque schemes (ASCII case-insensitive).
/// Opaque schemes (`javascript`, `mailto`, `tel`, `sms`, `data`) carry no
/// host or path hierarchy, so references using them are passed through.
/// Uses length + first byte to minimize comparisons.
pub fn is_opaque_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (3, Some(b't')) => bytes.eq_ignore_ascii_case(b"tel"),
        (3, Some(b's')) => bytes.eq_ignore_ascii_case(b"sms"),
        (4, Some(b'd')) => bytes.eq_ignore_ascii_case(b"data"),
        (6, Some(b'm')) => bytes.eq_ignore_ascii_case(b"mailto"),
        (10, Some(b'j')) => bytes.eq_ignore_ascii_case(b"javascript"),
        _ => false,
    }
}

/// Match an opaque scheme name at the start of the input (ASCII
/// case-insensitive). The `:` after it is optional, so `telephone.html`
/// matches `tel`. Returns the scheme length (excluding any colon).
pub fn opaque_scheme_prefix(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    ["javascript", "mailto", "tel", "sms", "data"]
        .into_iter()
        .find(|name| {
            bytes
                .get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name.as_bytes()))
        })
        .map(str::len)
}

/// Characters stripped from both ends of a reference before resolving.
/// Matches what HTML attribute values commonly carry around a link.
pub fn is_trimmable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Check if a character is an ASCII newline
pub fn is_ascii_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Authority character classification
/// Returns: 0=host passthrough, 1=host/port delimiter, 2=query/fragment delimiter
const AUTHORITY_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Delimiters (end of host in every grammar)
    table[b':' as usize] = 1;
    table[b'/' as usize] = 1;

    // Delimiters that only end the host in the document grammar
    table[b'?' as usize] = 2;
    table[b'#' as usize] = 2;

    table
};

/// Classify a byte while scanning a host (branchless via lookup table)
pub fn classify_authority_byte(b: u8) -> u8 {
    AUTHORITY_CHAR_TABLE[b as usize]
}

/// Bytes that may appear in a scheme name (ASCII letters and digits only)
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Errors that can occur while constructing a [`BaseUrl`](crate::BaseUrl)
///
/// Resolving a reference never fails; the only fatal condition is an
/// empty source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Source was empty
    InvalidInput,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidInput => "url must be a non-empty string or existing URL",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL construction
pub type Result<T> = core::result::Result<T, ParseError>;

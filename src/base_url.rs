use core::fmt;
use core::str::FromStr;

use once_cell::race::OnceBox;

use crate::compat::{Box, Cow, String, ToString};
use crate::error::{ParseError, Result};
use crate::path::basename;
use crate::url_components::UrlComponents;

/// Components to replace when deriving a [`BaseUrl`] from another one.
///
/// ```
/// use relurl::{BaseUrl, Overrides};
///
/// let url = BaseUrl::new("http://example.com/?a=b", Some(Overrides::new().query("c=d")))?;
/// assert_eq!(url.to_string(), "http://example.com/?c=d");
/// # Ok::<(), relurl::ParseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Query text, without the leading `?`
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Fragment text, without the leading `#`
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    fn apply(self, components: &mut UrlComponents) {
        let Self {
            scheme,
            host,
            port,
            path,
            query,
            fragment,
        } = self;
        for (slot, value) in [
            (&mut components.scheme, scheme),
            (&mut components.host, host),
            (&mut components.port, port),
            (&mut components.path, path),
            (&mut components.query, query),
            (&mut components.fragment, fragment),
        ] {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

/// Anything a [`BaseUrl`] can be built from
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Str(&'a str),
    Url(&'a BaseUrl),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<'a> From<&'a BaseUrl> for Source<'a> {
    fn from(value: &'a BaseUrl) -> Self {
        Self::Url(value)
    }
}

/// The URL of the document whose links are being rewritten.
///
/// Immutable once built. The string form and the components are each
/// computed lazily from the other and cached; whichever is missing is
/// derived on first use. Two threads racing to fill a cache compute the
/// same value and one of them is dropped.
pub struct BaseUrl {
    href: OnceBox<String>,
    components: OnceBox<UrlComponents>,
}

impl BaseUrl {
    /// Create a URL from a string or an existing URL, optionally replacing
    /// some of its components.
    ///
    /// Replacing components discards the original string form; it is
    /// rebuilt as `scheme://host[:port]path[?query][#fragment]`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInput`] if the source string is empty.
    pub fn new<'a>(source: impl Into<Source<'a>>, overrides: Option<Overrides>) -> Result<Self> {
        let url = match source.into() {
            Source::Str("") => return Err(ParseError::InvalidInput),
            Source::Str(href) => Self::from_href(href.to_string()),
            Source::Url(url) => url.clone(),
        };

        Ok(match overrides {
            Some(overrides) => url.with_overrides(overrides),
            None => url,
        })
    }

    /// Create a URL from a string
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInput`] if `input` is empty.
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(input, None)
    }

    /// Return an existing URL as-is, or build one from a string.
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use relurl::BaseUrl;
    ///
    /// let url = BaseUrl::parse("http://example.com/")?;
    /// assert!(matches!(BaseUrl::coerce(&url)?, Cow::Borrowed(u) if std::ptr::eq(u, &url)));
    /// # Ok::<(), relurl::ParseError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInput`] if given an empty string.
    pub fn coerce<'a>(source: impl Into<Source<'a>>) -> Result<Cow<'a, Self>> {
        match source.into() {
            Source::Url(url) => Ok(Cow::Borrowed(url)),
            Source::Str(href) => Self::parse(href).map(Cow::Owned),
        }
    }

    /// Copy of this URL with some components replaced
    #[must_use]
    pub fn with_overrides(&self, overrides: Overrides) -> Self {
        let mut components = self.components().clone();
        overrides.apply(&mut components);
        Self::from_components(components)
    }

    /// Resolve a link found on this page. See [`translate`](crate::translate).
    pub fn translate(&self, relative: &str) -> String {
        crate::resolver::translate(self, relative)
    }

    fn from_href(href: String) -> Self {
        Self {
            href: OnceBox::with_value(Box::new(href)),
            components: OnceBox::new(),
        }
    }

    fn from_components(components: UrlComponents) -> Self {
        Self {
            href: OnceBox::new(),
            components: OnceBox::with_value(Box::new(components)),
        }
    }

    /// The full URL string
    pub fn href(&self) -> &str {
        self.href
            .get_or_init(|| Box::new(serialize(self.components())))
            .as_str()
    }

    /// Components of the URL, parsed with the document grammar
    pub fn components(&self) -> &UrlComponents {
        self.components
            .get_or_init(|| Box::new(UrlComponents::parse_document(self.href())))
    }

    pub fn scheme(&self) -> &str {
        self.components().scheme().unwrap_or_default()
    }

    pub fn host(&self) -> &str {
        self.components().host().unwrap_or_default()
    }

    pub fn port(&self) -> &str {
        self.components().port().unwrap_or_default()
    }

    pub fn user(&self) -> &str {
        self.components().user().unwrap_or_default()
    }

    pub fn password(&self) -> &str {
        self.components().password().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.components().path().unwrap_or_default()
    }

    pub fn query(&self) -> &str {
        self.components().query().unwrap_or_default()
    }

    pub fn fragment(&self) -> &str {
        self.components().fragment().unwrap_or_default()
    }

    /// Final segment of the path, e.g. `kitten.jpg` for
    /// `http://example.com/kitten.jpg`
    pub fn basename(&self) -> &str {
        basename(self.path())
    }
}

/// Rebuild a URL string from components.
/// Empty components are dropped along with their separators.
fn serialize(components: &UrlComponents) -> String {
    let port = components.port().unwrap_or_default();
    let query = components.query().unwrap_or_default();
    let fragment = components.fragment().unwrap_or_default();

    let mut href = String::new();
    href.push_str(components.scheme().unwrap_or_default());
    href.push_str("://");
    href.push_str(components.host().unwrap_or_default());
    if !port.is_empty() {
        href.push(':');
        href.push_str(port);
    }
    href.push_str(components.path().unwrap_or_default());
    if !query.is_empty() {
        href.push('?');
        href.push_str(query);
    }
    if !fragment.is_empty() {
        href.push('#');
        href.push_str(fragment);
    }
    href
}

impl Clone for BaseUrl {
    fn clone(&self) -> Self {
        Self {
            href: cached_copy(&self.href),
            components: cached_copy(&self.components),
        }
    }
}

fn cached_copy<T: Clone>(cell: &OnceBox<T>) -> OnceBox<T> {
    cell.get()
        .map_or_else(OnceBox::new, |value| OnceBox::with_value(Box::new(value.clone())))
}

impl fmt::Debug for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseUrl")
            .field("href", &self.href())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

impl FromStr for BaseUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BaseUrl {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

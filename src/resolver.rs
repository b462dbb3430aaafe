use crate::base_url::{BaseUrl, Overrides};
use crate::compat::{Cow, String, ToString, format};
use crate::helpers::{
    escape_space_and_dollar, normalize_backslashes, repair_scheme_fragment, trim_reference,
};
use crate::path::{parent_directory, remove_dot_segments};
use crate::scheme::is_opaque_scheme;
use crate::url_components::UrlComponents;

/// Resolve an `href`/`src` value found on the page at `base` to the
/// absolute URL a browser would follow.
///
/// Never fails. Malformed references degrade to a best-effort result:
///
/// - blank references yield an empty string
/// - `#fragment` references are returned as-is (same page)
/// - `?query` replaces only the query of `base`
/// - `javascript:`, `mailto:`, `tel:`, `sms:` and `data:` references are
///   returned as-is
/// - backslashes before any query or fragment are read as slashes
/// - scheme and host of absolute references are lowercased
/// - spaces and `$` in the path and query become `%20` and `%24`
///
/// The port of `base` is not carried over to relative references.
///
/// Opaque scheme names are matched ASCII case-insensitively, so
/// `MAILTO:a@b` passes through unchanged like `mailto:a@b`. A scheme name needs no colon to count: `telephone.html`
/// starts with `tel` and is returned as-is.
///
/// # Examples
///
/// ```
/// use relurl::{BaseUrl, translate};
///
/// let base = BaseUrl::parse("http://example.com/foo/")?;
/// assert_eq!(translate(&base, "../bar baz"), "http://example.com/bar%20baz");
/// assert_eq!(translate(&base, "//example.net"), "http://example.net/");
/// assert_eq!(translate(&base, "#top"), "#top");
/// assert_eq!(translate(&base, "mailto:someone@example.com"), "mailto:someone@example.com");
/// # Ok::<(), relurl::ParseError>(())
/// ```
pub fn translate(base: &BaseUrl, relative: &str) -> String {
    let trimmed = trim_reference(relative);
    if trimmed.is_empty() {
        tracing::trace!("empty reference left untranslated");
        return String::new();
    }

    let reference = repair_scheme_fragment(trimmed);
    if reference.starts_with('#') {
        tracing::trace!(reference, "same-page fragment");
        return reference.to_string();
    }
    if let Some(query) = reference.strip_prefix('?') {
        tracing::trace!(query, "query-only reference");
        return base.with_overrides(Overrides::new().query(query)).to_string();
    }

    let reference = normalize_backslashes(reference);
    let reference = if reference.starts_with("//") {
        Cow::Owned(format!("{}:{reference}", base.scheme()))
    } else {
        reference
    };

    let url = UrlComponents::parse(&reference);
    if url.scheme().is_some_and(is_opaque_scheme) {
        tracing::trace!(reference = trimmed, "opaque scheme passed through");
        return trimmed.to_string();
    }

    let path = url.path().map(escape_space_and_dollar).unwrap_or_default();
    let query = url.query().map(escape_space_and_dollar).unwrap_or_default();

    let (scheme, host, path) = match url.scheme() {
        Some(scheme) => {
            tracing::trace!(reference = %reference, "absolute reference");
            (
                scheme.to_ascii_lowercase(),
                url.host().unwrap_or_default().to_ascii_lowercase(),
                path.into_owned(),
            )
        }
        None => {
            tracing::trace!(reference = %reference, base = %base, "relative reference");
            let path = if path.starts_with('/') {
                path.into_owned()
            } else {
                let directory = parent_directory(base.path());
                format!("{directory}/{path}")
            };
            (base.scheme().to_string(), base.host().to_string(), path)
        }
    };

    let path = remove_dot_segments(&path);
    let port = url.port().unwrap_or_default();
    let fragment = url.fragment().unwrap_or_default();

    let mut href = String::with_capacity(
        scheme.len() + host.len() + port.len() + path.len() + query.len() + fragment.len() + 8,
    );
    href.push_str(&scheme);
    href.push_str("://");
    href.push_str(&host);
    if !port.is_empty() {
        href.push(':');
        href.push_str(port);
    }
    if path.is_empty() {
        href.push('/');
    } else {
        href.push_str(&path);
    }
    if !query.is_empty() {
        href.push('?');
        href.push_str(&query);
    }
    if !fragment.is_empty() {
        href.push('#');
        href.push_str(fragment);
    }
    href
}

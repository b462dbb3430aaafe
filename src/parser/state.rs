/// Component parser state machine states
///
/// States are visited strictly in declaration order; `SchemeOrPath` and
/// `HostPort` are mutually exclusive branches out of `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Looking for a `scheme:/` prefix
    Start,
    /// No hierarchical scheme: looking for an opaque `scheme:` prefix
    SchemeOrPath,
    /// After `scheme:/+`: optional userinfo, host and port
    HostPort,
    /// Path state
    Path,
    /// Query state
    Query,
    /// Fragment state
    Fragment,
}

mod state;

pub use state::State;

use crate::character_sets::classify_authority_byte;
use crate::checkers::{hierarchical_prefix_len, port_len, scheme_len};
use crate::compat::ToString;
use crate::helpers::strip_newlines;
use crate::scheme::opaque_scheme_prefix;
use crate::url_components::UrlComponents;

/// Which decomposition rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Reference grammar: the path runs up to `?` only, so a `#` without a
    /// preceding query stays inside the path.
    Reference,
    /// Document grammar: host and path also end at `?` or `#`.
    Document,
}

/// Best-effort decomposition of a URL-like string.
///
/// Consumes the input left to right and never backtracks. Only components
/// that were actually matched are set on the result.
pub fn parse_components(input: &str, grammar: Grammar) -> UrlComponents {
    Parser::new(input, grammar).run()
}

pub(crate) struct Parser<'a> {
    input: &'a str,
    grammar: Grammar,
    pointer: usize,
    components: UrlComponents,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, grammar: Grammar) -> Self {
        Self {
            input,
            grammar,
            pointer: 0,
            components: UrlComponents::default(),
        }
    }

    pub(crate) fn run(mut self) -> UrlComponents {
        let mut state = State::Start;
        while let Some(next) = self.step(state) {
            state = next;
        }
        self.components
    }

    /// Run a single state and return the state that follows it
    pub(crate) fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Start => Some(self.start()),
            State::SchemeOrPath => Some(self.scheme_or_path()),
            State::HostPort => Some(self.host_port()),
            State::Path => Some(self.path()),
            State::Query => Some(self.query()),
            State::Fragment => {
                self.fragment();
                None
            }
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pointer..]
    }

    fn start(&mut self) -> State {
        let bytes = self.input.as_bytes();
        match hierarchical_prefix_len(bytes) {
            Some(prefix_len) => {
                self.components.scheme = Some(self.input[..scheme_len(bytes)].to_string());
                self.pointer = prefix_len;
                State::HostPort
            }
            None => State::SchemeOrPath,
        }
    }

    fn scheme_or_path(&mut self) -> State {
        if let Some(len) = opaque_scheme_prefix(self.input) {
            self.components.scheme = Some(self.input[..len].to_string());
            // The ':' is optional
            self.pointer = len + usize::from(self.input[len..].starts_with(':'));
        }
        State::Path
    }

    fn host_port(&mut self) -> State {
        let rest = self.remaining();

        // References keep an '@' in the host or path; page URLs split off
        // userinfo when the '@' comes before any '/', '?' or '#'
        let at = match self.grammar {
            Grammar::Reference => None,
            Grammar::Document => {
                let authority_end =
                    memchr::memchr3(b'/', b'?', b'#', rest.as_bytes()).unwrap_or(rest.len());
                memchr::memrchr(b'@', &rest.as_bytes()[..authority_end])
            }
        };
        if let Some(at) = at {
            let userinfo = &rest[..at];
            match userinfo.split_once(':') {
                Some((user, password)) => {
                    self.components.user = Some(user.to_string());
                    self.components.password = Some(password.to_string());
                }
                None => self.components.user = Some(userinfo.to_string()),
            }
            self.pointer += at + 1;
        }

        let rest = self.remaining();
        let stop_class = match self.grammar {
            Grammar::Reference => 1,
            Grammar::Document => 2,
        };
        let host_len = rest
            .bytes()
            .take_while(|&b| {
                let class = classify_authority_byte(b);
                class == 0 || class > stop_class
            })
            .count();
        if host_len > 0 {
            self.components.host = Some(rest[..host_len].to_string());
            self.pointer += host_len;
        }

        let rest = self.remaining().as_bytes();
        if rest.first() == Some(&b':') {
            let digits = port_len(&rest[1..]);
            if digits > 0 {
                let start = self.pointer + 1;
                self.components.port = Some(self.input[start..start + digits].to_string());
                self.pointer = start + digits;
            }
        }

        State::Path
    }

    fn path(&mut self) -> State {
        let rest = self.remaining();
        let end = match self.grammar {
            Grammar::Reference => memchr::memchr(b'?', rest.as_bytes()),
            Grammar::Document => memchr::memchr2(b'?', b'#', rest.as_bytes()),
        }
        .unwrap_or(rest.len());

        if end > 0 {
            // Browsers drop newlines from wrapped attribute values
            self.components.path = Some(strip_newlines(&rest[..end]).into_owned());
            self.pointer += end;
        }
        State::Query
    }

    fn query(&mut self) -> State {
        let rest = self.remaining();
        if let Some(body) = rest.strip_prefix('?') {
            let end = memchr::memchr(b'#', body.as_bytes()).unwrap_or(body.len());
            self.components.query = Some(body[..end].to_string());
            self.pointer += 1 + end;
        }
        State::Fragment
    }

    fn fragment(&mut self) {
        if let Some(body) = self.remaining().strip_prefix('#') {
            self.components.fragment = Some(body.to_string());
            self.pointer = self.input.len();
        }
    }
}

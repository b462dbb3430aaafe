#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod base_url;
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod parser;
mod path;
mod resolver;
mod scheme;
mod url_components;

// Public API
pub use base_url::{BaseUrl, Overrides, Source};
pub use error::ParseError;
pub use resolver::translate;
pub use url_components::UrlComponents;

pub type Result<T> = core::result::Result<T, ParseError>;

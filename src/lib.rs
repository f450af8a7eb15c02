//! Prefix autocomplete over a fixed vocabulary.
//!
//! The core is [`PrefixIndex`], a trie-based ordered map that enumerates
//! every key sharing a prefix in sorted order. [`Vocabulary`] builds one over
//! a word list, and the [`server`] module exposes it over HTTP.
//!
//! # Features
//!
//! - Lookups in O(k) where k is the key length
//! - Lazy, sorted prefix iteration over keys, values, or both
//! - Longest stored prefix of a key
//! - Read-only sharing across threads once populated

mod as_bytes;
pub mod config;
mod error;
mod iter;
mod node;
mod node_pool;
mod prefix_index;
pub mod server;
mod vocabulary;

pub use as_bytes::AsBytes;
pub use config::Config;
pub use error::{Error, Result};
pub use iter::{PrefixIter, PrefixKeys, PrefixValues};
pub use prefix_index::PrefixIndex;
pub use vocabulary::{BUILTIN_TERMS, Vocabulary};

#[cfg(test)]
mod proptest_index;

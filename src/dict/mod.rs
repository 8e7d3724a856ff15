//! English → phonetic dictionary storage.
//!
//! `PhoneticDictionary` holds word → Kirschenbaum IPA mappings loaded from
//! `word;phonetic` text files. The lookup stage only sees the `Dictionary`
//! trait, so any read-only mapping can be injected.

mod phonetic_dict;

pub use phonetic_dict::PhoneticDictionary;

use std::collections::HashMap;
use std::io;

/// Error type for loading dictionary text files.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Read-only word → phonetic mapping.
///
/// Implementations must not change after construction; lookups may run
/// concurrently from several threads.
pub trait Dictionary: Send + Sync {
    /// Exact-match lookup. `Some("")` is a deliberate silent entry, distinct
    /// from `None`.
    fn lookup(&self, word: &str) -> Option<&str>;
}

impl Dictionary for HashMap<String, String> {
    fn lookup(&self, word: &str) -> Option<&str> {
        self.get(word).map(String::as_str)
    }
}

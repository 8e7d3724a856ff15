//! Phonetic rewriter stage: Kirschenbaum IPA → Inglish spelling.
//!
//! Marker characters are deleted, then a byte trie over the substitution
//! table rewrites each string in one pass, longest pattern first.

mod config;
mod rewriter;
mod trie;

pub use config::{
    parse_rules_toml, preset_toml, Preset, RewriteConfig, RewriteConfigError, LEGACY_TOML,
    STANDARD_TOML,
};
pub use rewriter::Rewriter;

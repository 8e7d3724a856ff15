//! English → Inglish transliteration.
//!
//! Two stages: [`lookup`] maps each word to its Kirschenbaum IPA
//! transcription through a [`dict::Dictionary`], and [`rewrite`] turns the
//! transcription into a simplified spelling. [`pipeline::Transliterator`]
//! runs both.

pub mod dict;
pub mod lookup;
pub mod pipeline;
pub mod rewrite;
pub mod sanitize;
#[cfg(test)]
mod testutil;
pub mod trace_init;

pub use dict::{DictError, Dictionary, PhoneticDictionary};
pub use lookup::{english_to_phonetic, lookup_word, lookup_words, WordResult, UNRESOLVED_FENCE};
pub use pipeline::{Transliterator, WordBreakdown};
pub use rewrite::{Preset, RewriteConfig, RewriteConfigError, Rewriter};

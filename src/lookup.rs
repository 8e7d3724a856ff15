//! Dictionary lookup stage: English text → per-word phonetic strings.

use std::fmt;

use tracing::{debug, debug_span};

use crate::dict::Dictionary;
use crate::sanitize::{is_fenced, sanitize_english};

/// Fence placed on both sides of a word that could not be transliterated.
pub const UNRESOLVED_FENCE: &str = "```";

/// Tokens are split on this character only.
pub(crate) const WORD_SEPARATOR: char = ' ';

/// Outcome of looking up one input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordResult {
    /// Phonetic transcription from the dictionary. Empty for silent entries.
    Phonetic(String),
    /// No entry under either normalization; holds the original token.
    Unresolved(String),
}

impl WordResult {
    /// Recover a `WordResult` from its string form.
    ///
    /// A string fenced by [`UNRESOLVED_FENCE`] on both sides is taken as an
    /// unresolved token; anything else is phonetic.
    pub fn from_phonetic_str(s: &str) -> Self {
        if is_fenced(s, UNRESOLVED_FENCE) {
            let inner = &s[UNRESOLVED_FENCE.len()..s.len() - UNRESOLVED_FENCE.len()];
            WordResult::Unresolved(inner.to_string())
        } else {
            WordResult::Phonetic(s.to_string())
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, WordResult::Phonetic(_))
    }
}

impl fmt::Display for WordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordResult::Phonetic(p) => f.write_str(p),
            WordResult::Unresolved(word) => {
                write!(f, "{UNRESOLVED_FENCE}{word}{UNRESOLVED_FENCE}")
            }
        }
    }
}

/// Look up a single token: lowercase match first, then the case-preserving
/// form, otherwise unresolved.
pub fn lookup_word<D: Dictionary + ?Sized>(dict: &D, word: &str) -> WordResult {
    if let Some(phonetic) = dict.lookup(&sanitize_english(word, true)) {
        return WordResult::Phonetic(phonetic.to_string());
    }
    if let Some(phonetic) = dict.lookup(&sanitize_english(word, false)) {
        return WordResult::Phonetic(phonetic.to_string());
    }
    debug!(word, "no dictionary entry");
    WordResult::Unresolved(word.to_string())
}

/// Look up every space-separated token of `text`, index-aligned with
/// `text.split(' ')`.
pub fn lookup_words<D: Dictionary + ?Sized>(dict: &D, text: &str) -> Vec<WordResult> {
    let _span = debug_span!("lookup_words", len = text.len()).entered();
    text.split(WORD_SEPARATOR)
        .map(|word| lookup_word(dict, word))
        .collect()
}

/// String-level lookup entrypoint: unresolved tokens come back fenced.
pub fn english_to_phonetic<D: Dictionary + ?Sized>(dict: &D, text: &str) -> Vec<String> {
    lookup_words(dict, text)
        .iter()
        .map(ToString::to_string)
        .collect()
}

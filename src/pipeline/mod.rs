//! English → Inglish, both stages bound to one dictionary and rule set.


use serde::Serialize;
use tracing::debug_span;

use crate::dict::Dictionary;
use crate::lookup::{lookup_words, WordResult, WORD_SEPARATOR};
use crate::rewrite::Rewriter;

/// One input token traced through both stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordBreakdown {
    pub english: String,
    pub phonetic: String,
    pub inglish: String,
    pub resolved: bool,
}

/// Borrowing handle over a loaded dictionary and a compiled rewriter.
///
/// Both are read-only, so one `Transliterator` can be shared across threads.
#[derive(Clone, Copy)]
pub struct Transliterator<'a> {
    dict: &'a dyn Dictionary,
    rewriter: &'a Rewriter,
}

impl<'a> Transliterator<'a> {
    pub fn new(dict: &'a dyn Dictionary, rewriter: &'a Rewriter) -> Self {
        Self { dict, rewriter }
    }

    /// Uses the shared standard rule set.
    pub fn with_standard_rules(dict: &'a dyn Dictionary) -> Self {
        Self::new(dict, Rewriter::standard())
    }

    /// Phonetic stage only.
    pub fn phonetic(&self, text: &str) -> Vec<WordResult> {
        lookup_words(self.dict, text)
    }

    /// One spelling per space-separated token of `text`.
    pub fn transliterate(&self, text: &str) -> Vec<String> {
        let _span = debug_span!("transliterate", len = text.len()).entered();
        self.rewriter.rewrite_words(&self.phonetic(text))
    }

    pub fn transliterate_line(&self, text: &str) -> String {
        self.transliterate(text).join(" ")
    }

    pub fn explain(&self, text: &str) -> Vec<WordBreakdown> {
        text.split(WORD_SEPARATOR)
            .zip(self.phonetic(text))
            .map(|(english, result)| WordBreakdown {
                english: english.to_string(),
                phonetic: result.to_string(),
                inglish: self.rewriter.rewrite_word(&result),
                resolved: result.is_resolved(),
            })
            .collect()
    }
}

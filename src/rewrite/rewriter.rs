use std::sync::OnceLock;

use tracing::debug_span;

use super::config::{parse_rules_toml, preset_toml, Preset, RewriteConfig, RewriteConfigError};
use super::trie::SubstitutionTrie;
use crate::lookup::WordResult;
use crate::sanitize::strip_markers;

/// Compiled marker set and substitution table.
#[derive(Debug)]
pub struct Rewriter {
    markers: Vec<String>,
    trie: SubstitutionTrie,
}

impl Rewriter {
    pub fn new(config: RewriteConfig) -> Result<Self, RewriteConfigError> {
        config.validate()?;
        let trie = SubstitutionTrie::build(
            config
                .rules
                .iter()
                .map(|(pattern, replacement)| (pattern.as_str(), replacement.as_str())),
        );
        Ok(Self {
            markers: config.markers,
            trie,
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RewriteConfigError> {
        Self::new(parse_rules_toml(toml_str)?)
    }

    pub fn preset(preset: Preset) -> Self {
        // build.rs runs the same checks as `RewriteConfig::validate` on every preset.
        Self::from_toml(preset_toml(preset)).expect("embedded preset must be valid")
    }

    /// Shared instance of the standard preset, built on first use.
    pub fn standard() -> &'static Rewriter {
        static INSTANCE: OnceLock<Rewriter> = OnceLock::new();
        INSTANCE.get_or_init(|| Rewriter::preset(Preset::Standard))
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn strip_markers(&self, phonetic: &str) -> String {
        strip_markers(phonetic, self.markers.as_slice())
    }

    /// Rewrite one phonetic string: strip markers, then substitute in a
    /// single left-to-right pass taking the longest pattern at each position.
    pub fn rewrite(&self, phonetic: &str) -> String {
        let cleaned = self.strip_markers(phonetic);
        let bytes = cleaned.as_bytes();
        let mut out = String::with_capacity(cleaned.len() * 2);
        let mut i = 0;

        while i < bytes.len() {
            if let Some((len, replacement)) = self.trie.longest_match(&bytes[i..]) {
                out.push_str(replacement);
                i += len;
                continue;
            }
            // Patterns are whole UTF-8 strings, so `i` is always on a char
            // boundary here.
            let Some(ch) = cleaned[i..].chars().next() else {
                break;
            };
            out.push(ch);
            i += ch.len_utf8();
        }

        out
    }

    /// Unresolved words pass through as their fenced original text.
    pub fn rewrite_word(&self, word: &WordResult) -> String {
        match word {
            WordResult::Phonetic(phonetic) => self.rewrite(phonetic),
            WordResult::Unresolved(_) => word.to_string(),
        }
    }

    pub fn rewrite_words(&self, words: &[WordResult]) -> Vec<String> {
        let _span = debug_span!("rewrite_words", count = words.len()).entered();
        words.iter().map(|w| self.rewrite_word(w)).collect()
    }

    /// String-level rewrite entrypoint. Fenced entries are recognized as
    /// unresolved words and left untouched.
    pub fn phonetic_to_inglish<S: AsRef<str>>(&self, phonetic_words: &[S]) -> Vec<String> {
        let _span = debug_span!("phonetic_to_inglish", count = phonetic_words.len()).entered();
        phonetic_words
            .iter()
            .map(|p| self.rewrite_word(&WordResult::from_phonetic_str(p.as_ref())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> &'static Rewriter {
        Rewriter::standard()
    }

    #[test]
    fn test_plain_passthrough() {
        let r = Rewriter::from_toml(r#"rules = [["x", "ks"]]"#).unwrap();
        assert_eq!(r.rewrite("du"), "du");
    }

    #[test]
    fn test_do() {
        assert_eq!(standard().rewrite("d'u"), "doo");
    }

    #[test]
    fn test_digraph_beats_component() {
        // "S" alone is "sh", but "tS" is "tsj".
        assert_eq!(standard().rewrite("tS"), "tsj");
        assert_eq!(standard().rewrite("S"), "sh");
        assert_eq!(standard().rewrite("dZ"), "dj");
        assert_eq!(standard().rewrite("Z"), "sj");
        assert_eq!(standard().rewrite("INk"), "ingk");
        assert_eq!(standard().rewrite("INg"), "ing");
        assert_eq!(standard().rewrite("@U"), "ow");
        assert_eq!(standard().rewrite("@"), "aa");
    }

    #[test]
    fn test_longest_match_regardless_of_table_order() {
        let r = Rewriter::from_toml(r#"rules = [["a", "1"], ["ab", "2"]]"#).unwrap();
        assert_eq!(r.rewrite("ab"), "2");
        assert_eq!(r.rewrite("aab"), "12");
    }

    #[test]
    fn test_replacement_not_rescanned() {
        // "U" → "u" must not then become "oo".
        assert_eq!(standard().rewrite("U"), "u");
        assert_eq!(standard().rewrite("Uu"), "uoo");
        let r = Rewriter::from_toml(r#"rules = [["a", "b"], ["b", "c"]]"#).unwrap();
        assert_eq!(r.rewrite("ab"), "bc");
    }

    #[test]
    fn test_non_overlapping() {
        let r = Rewriter::from_toml(r#"rules = [["aa", "X"]]"#).unwrap();
        assert_eq!(r.rewrite("aaa"), "Xa");
    }

    #[test]
    fn test_marker_removed_before_substitution() {
        // Stress mark splits the digraph until it is stripped.
        assert_eq!(standard().rewrite("t'S"), "tsj");
        assert_eq!(standard().rewrite("@'U"), "ow");
        assert_eq!(standard().rewrite("k'Ar\\"), "kahr");
        assert_eq!(standard().rewrite("pr@n.VnsI'eISn"), "praanuhnsiayshn");
    }

    #[test]
    fn test_strip_markers_idempotent() {
        let once = standard().strip_markers("pr@n.VnsI'eISn\\");
        assert_eq!(standard().strip_markers(&once), once);
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(standard().rewrite("dé"), "dé");
        assert_eq!(standard().rewrite("ɪu"), "ɪoo");
    }

    #[test]
    fn test_empty() {
        assert_eq!(standard().rewrite(""), "");
        assert_eq!(standard().rewrite("'"), "");
    }

    #[test]
    fn test_unresolved_passes_through() {
        let word = WordResult::Unresolved("unknown's".into());
        assert_eq!(standard().rewrite_word(&word), "```unknown's```");
    }

    #[test]
    fn test_phonetic_to_inglish_detects_fence() {
        let out = standard().phonetic_to_inglish(&["d'u", "```unknownxyz```", ""]);
        assert_eq!(out, vec!["doo", "```unknownxyz```", ""]);
    }

    #[test]
    fn test_rewrite_words_index_aligned() {
        let words = vec![
            WordResult::Phonetic("d'u".into()),
            WordResult::Unresolved("Xyz".into()),
            WordResult::Phonetic(String::new()),
        ];
        let out = standard().rewrite_words(&words);
        assert_eq!(out, vec!["doo", "```Xyz```", ""]);
    }

    #[test]
    fn test_legacy_preset_keeps_vowels() {
        let r = Rewriter::preset(Preset::Legacy);
        assert_eq!(r.rewrite("tS'e@r"), "tsje@r");
        // Only the stress mark is stripped.
        assert_eq!(r.rewrite("k'Ar\\"), "kAr\\");
    }

    #[test]
    fn test_every_preset_builds() {
        for preset in [Preset::Standard, Preset::Legacy] {
            let config = parse_rules_toml(preset_toml(preset)).unwrap();
            assert!(config.validate().is_ok(), "{preset:?}");
            assert_eq!(Rewriter::preset(preset).markers(), config.markers);
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RewriteConfig {
            markers: vec![],
            rules: vec![],
        };
        assert!(matches!(
            Rewriter::new(config),
            Err(RewriteConfigError::Empty)
        ));
    }

    #[test]
    fn test_markers_accessor() {
        assert_eq!(standard().markers(), ["'", ".", "\\"]);
    }
}

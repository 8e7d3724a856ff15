use std::collections::HashSet;

use serde::Deserialize;

pub const STANDARD_TOML: &str = include_str!("presets/standard.toml");
pub const LEGACY_TOML: &str = include_str!("presets/legacy.toml");

/// Built-in rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Preset {
    /// Stress, open-back vowel and approximant markers; consonant and vowel
    /// rules.
    #[default]
    Standard,
    /// Stress marker only; consonant rules only.
    Legacy,
}

/// Returns the embedded TOML for a preset.
pub fn preset_toml(preset: Preset) -> &'static str {
    match preset {
        Preset::Standard => STANDARD_TOML,
        Preset::Legacy => LEGACY_TOML,
    }
}

/// Marker set and ordered substitution table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewriteConfig {
    #[serde(default)]
    pub markers: Vec<String>,
    pub rules: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum RewriteConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("rules table is empty")]
    Empty,
    #[error("empty pattern (replacement {0:?})")]
    EmptyPattern(String),
    #[error("duplicate pattern: {0}")]
    DuplicatePattern(String),
    #[error("empty marker")]
    EmptyMarker,
    #[error("pattern {pattern:?} contains marker {marker:?} and can never match")]
    UnreachablePattern { pattern: String, marker: String },
}

impl RewriteConfig {
    pub fn validate(&self) -> Result<(), RewriteConfigError> {
        if self.rules.is_empty() {
            return Err(RewriteConfigError::Empty);
        }
        if self.markers.iter().any(String::is_empty) {
            return Err(RewriteConfigError::EmptyMarker);
        }

        let mut seen = HashSet::new();
        for (pattern, replacement) in &self.rules {
            if pattern.is_empty() {
                return Err(RewriteConfigError::EmptyPattern(replacement.clone()));
            }
            if !seen.insert(pattern.as_str()) {
                return Err(RewriteConfigError::DuplicatePattern(pattern.clone()));
            }
            if let Some(marker) = self.markers.iter().find(|m| pattern.contains(m.as_str())) {
                return Err(RewriteConfigError::UnreachablePattern {
                    pattern: pattern.clone(),
                    marker: marker.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate a rule table.
pub fn parse_rules_toml(toml_str: &str) -> Result<RewriteConfig, RewriteConfigError> {
    let config: RewriteConfig =
        toml::from_str(toml_str).map_err(|e| RewriteConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

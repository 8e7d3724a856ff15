use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug_span, info};

use super::{DictError, Dictionary};

const FIELD_SEPARATOR: char = ';';

/// In-memory English → phonetic dictionary.
///
/// Source format: one `word;phonetic` record per line. Fields after the
/// second are ignored and blank lines are skipped. When a word appears more
/// than once, the last record wins.
#[derive(Debug, Default, Clone)]
pub struct PhoneticDictionary {
    entries: HashMap<String, String>,
}

impl PhoneticDictionary {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn parse(text: &str) -> Result<Self, DictError> {
        let mut entries = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            insert_record(&mut entries, line, idx + 1)?;
        }
        Ok(Self { entries })
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictError> {
        let mut entries = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            insert_record(&mut entries, &line, idx + 1)?;
        }
        Ok(Self { entries })
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let _span = debug_span!("open_dictionary", path = %path.display()).entered();
        let file = File::open(path)?;
        let dict = Self::from_reader(BufReader::new(file))?;
        info!(entries = dict.len(), path = %path.display(), "dictionary loaded");
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (word, phonetic) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Dictionary for PhoneticDictionary {
    fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }
}

fn insert_record(
    entries: &mut HashMap<String, String>,
    line: &str,
    line_no: usize,
) -> Result<(), DictError> {
    if line.trim().is_empty() {
        return Ok(());
    }
    let mut fields = line.split(FIELD_SEPARATOR);
    let (Some(word), Some(phonetic)) = (fields.next(), fields.next()) else {
        return Err(DictError::Parse {
            line: line_no,
            reason: format!("expected `word;phonetic`, got {line:?}"),
        });
    };
    entries.insert(word.to_string(), phonetic.to_string());
    Ok(())
}

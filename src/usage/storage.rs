use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fsutil::write_atomic;
use crate::store::Language;

/// File name of the per-language usage counter file.
pub const USAGE_FILE_NAME: &str = "word_increment.csv";

/// Header line written at the top of every usage file.
const HEADER: &str = "word,count";

/// Resolve the usage counter file for a source language.
pub fn usage_path(root: &Path, lang: Language) -> PathBuf {
    root.join(lang.dir_name()).join(USAGE_FILE_NAME)
}

/// In-memory usage counters, one row per word in append order.
///
/// Row order is load/insertion order, never sorted; a freshly incremented
/// word lands at the end of the file.
#[derive(Debug, Clone, Default)]
pub struct UsageCounts {
    rows: Vec<(String, u64)>,
}

impl UsageCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for `word`, inserting a new row with count 1
    /// if the word has never been counted. Returns the new count.
    pub fn increment(&mut self, word: &str) -> u64 {
        if let Some(row) = self.rows.iter_mut().find(|(w, _)| w == word) {
            row.1 += 1;
            return row.1;
        }
        self.rows.push((word.to_string(), 1));
        1
    }

    /// Current count for `word`, if it has ever been incremented.
    pub fn count(&self, word: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Words in row (append) order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(word, _)| word.as_str())
    }

    /// Parse usage-file contents. The first line is the header and is
    /// skipped unconditionally.
    fn parse(contents: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in contents.lines().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let (word, count) = line
                .split_once(',')
                .with_context(|| format!("Malformed usage row: {line:?}"))?;
            let count: u64 = count
                .trim()
                .parse()
                .with_context(|| format!("Invalid usage count for word {word:?}"))?;
            rows.push((word.to_string(), count));
        }
        Ok(Self { rows })
    }

    /// Serialize to usage-file contents: header plus one `word,count` row
    /// per word, no spaces around the separator.
    fn render(&self) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        for (word, count) in &self.rows {
            out.push_str(word);
            out.push(',');
            out.push_str(&count.to_string());
            out.push('\n');
        }
        out
    }
}

/// Persistent usage counters for one source language.
///
/// Each increment loads the whole file, bumps the row in memory, and
/// rewrites the file through an atomic replace.
#[derive(Debug)]
pub struct UsageFile {
    path: PathBuf,
}

impl UsageFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open the usage file for `lang` under the dictionary root.
    pub fn for_language(root: &Path, lang: Language) -> Self {
        Self::new(usage_path(root, lang))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the counters, treating a missing file as empty.
    pub fn load(&self) -> Result<UsageCounts> {
        if !self.path.exists() {
            return Ok(UsageCounts::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read usage file: {}", self.path.display()))?;
        UsageCounts::parse(&contents)
            .with_context(|| format!("Failed to parse usage file: {}", self.path.display()))
    }

    /// Increment the counter for `word` and persist. Creates the file
    /// (header included) on first use. Returns the new count.
    pub fn increment(&self, word: &str) -> Result<u64> {
        let mut counts = self.load()?;
        let count = counts.increment(word);
        write_atomic(&self.path, &counts.render())?;
        Ok(count)
    }

    /// Current persisted count for `word`.
    pub fn count(&self, word: &str) -> Result<Option<u64>> {
        Ok(self.load()?.count(word))
    }
}

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ensure_directories;
use crate::fsutil::write_atomic;
use crate::store::records::{Direction, Language, Record};
use crate::usage::UsageFile;

/// File name of the English-to-French store.
pub const EN_TO_FR_FILE: &str = "american-english_tofr.csv";

/// File name of the French-to-English store.
pub const FR_TO_EN_FILE: &str = "french_toen.csv";

/// Resolve the store file for a translation direction.
pub fn store_path(root: &Path, direction: Direction) -> PathBuf {
    let file_name = match direction {
        Direction::EnFr => EN_TO_FR_FILE,
        Direction::FrEn => FR_TO_EN_FILE,
    };
    root.join(direction.source().dir_name()).join(file_name)
}

/// Result of scanning a store for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordMatch {
    /// Zero-based index of the matching line.
    pub line: usize,
    /// Whether the record is a bare placeholder (word only, no
    /// translation fields).
    pub bare: bool,
}

/// Outcome of an [`TranslationStore::add`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The word was not in the store; a new record was appended and the
    /// usage counter for the source language incremented.
    Added,
    /// The word existed as a bare placeholder; its line was rewritten in
    /// place with the supplied translations.
    Updated,
    /// The word already had translations; the genuinely new ones (possibly
    /// zero) were appended to its record.
    Appended(usize),
}

/// A per-direction translation store rooted at a dictionary directory.
///
/// Mutations are whole-file: the store is read entirely, modified in
/// memory, and rewritten through an atomic replace. There is no locking;
/// the store is a single-user local file.
#[derive(Debug)]
pub struct TranslationStore {
    root: PathBuf,
    direction: Direction,
}

impl TranslationStore {
    /// Open the store for `direction` under `root`, creating the
    /// per-language directories if they are missing.
    pub fn open(root: impl Into<PathBuf>, direction: Direction) -> Result<Self> {
        let root = root.into();
        ensure_directories(&root)?;
        Ok(Self { root, direction })
    }

    /// The language this store records translations from.
    pub fn source(&self) -> Language {
        self.direction.source()
    }

    /// Path of the backing store file.
    pub fn path(&self) -> PathBuf {
        store_path(&self.root, self.direction)
    }

    /// Scan the store for `word`.
    ///
    /// Matching is exact string equality on the whitespace-trimmed first
    /// field of each line. A missing store file is simply "not found".
    pub fn find_word(&self, word: &str) -> Result<Option<WordMatch>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store file: {}", path.display()))?;

        for (index, line) in contents.lines().enumerate() {
            let record = Record::parse(line);
            if record.word == word {
                return Ok(Some(WordMatch {
                    line: index,
                    bare: record.is_bare(),
                }));
            }
        }
        Ok(None)
    }

    /// Translations currently recorded for `word`, in store order.
    pub fn translations_of(&self, word: &str) -> Result<Option<Vec<String>>> {
        let Some(found) = self.find_word(word)? else {
            return Ok(None);
        };
        let lines = self.load_lines()?;
        let record = Record::parse(&lines[found.line]);
        Ok(Some(record.translations))
    }

    /// Record `translations` for `word`, dispatching on the lookup result.
    ///
    /// - Word absent: append a new record and increment the source-language
    ///   usage counter.
    /// - Word present as a bare placeholder: rewrite that line in place
    ///   with the supplied translations. No usage increment.
    /// - Word present with translations: merge, appending only the
    ///   translations not already recorded. No usage increment.
    pub fn add(&self, word: &str, translations: &[String]) -> Result<Outcome> {
        match self.find_word(word)? {
            None => {
                let mut lines = self.load_lines()?;
                lines.push(Record::new(word, translations.to_vec()).to_line());
                self.write_lines(&lines)?;

                UsageFile::for_language(&self.root, self.source())
                    .increment(word)
                    .with_context(|| format!("Failed to count usage for word {word:?}"))?;
                Ok(Outcome::Added)
            }
            Some(found) if found.bare => {
                let mut lines = self.load_lines()?;
                lines[found.line] = Record::new(word, translations.to_vec()).to_line();
                self.write_lines(&lines)?;
                Ok(Outcome::Updated)
            }
            Some(found) => {
                let mut lines = self.load_lines()?;
                let mut record = Record::parse(&lines[found.line]);
                let added = record.merge(translations);
                lines[found.line] = record.to_line();
                self.write_lines(&lines)?;
                Ok(Outcome::Appended(added))
            }
        }
    }

    /// All store lines, or an empty list if the file does not exist yet.
    fn load_lines(&self) -> Result<Vec<String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store file: {}", path.display()))?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    /// Rewrite the whole store file atomically.
    fn write_lines(&self, lines: &[String]) -> Result<()> {
        let mut contents = lines.join("\n");
        if !lines.is_empty() {
            contents.push('\n');
        }
        write_atomic(&self.path(), &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::usage_path;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir, direction: Direction) -> TranslationStore {
        TranslationStore::open(temp_dir.path(), direction).expect("open store")
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("read file")
    }

    #[test]
    fn test_store_path_mapping() {
        let root = Path::new("/data/dico");
        assert_eq!(
            store_path(root, Direction::EnFr),
            Path::new("/data/dico/english/american-english_tofr.csv")
        );
        assert_eq!(
            store_path(root, Direction::FrEn),
            Path::new("/data/dico/french/french_toen.csv")
        );
    }

    #[test]
    fn test_open_creates_language_directories() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let _store = store(&temp_dir, Direction::FrEn);

        assert!(temp_dir.path().join("english").is_dir());
        assert!(temp_dir.path().join("french").is_dir());
    }

    #[test]
    fn test_find_word_missing_store_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);

        assert_eq!(store.find_word("chat").expect("find"), None);
    }

    #[test]
    fn test_find_word_reports_line_and_bareness() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        fs::write(store.path(), "maison, house\nbonjour\nchat, cat\n").expect("seed");

        let maison = store.find_word("maison").expect("find").expect("match");
        assert_eq!(maison.line, 0);
        assert!(!maison.bare);

        let bonjour = store.find_word("bonjour").expect("find").expect("match");
        assert_eq!(bonjour.line, 1);
        assert!(bonjour.bare);

        let chat = store.find_word("chat").expect("find").expect("match");
        assert_eq!(chat.line, 2);
        assert!(!chat.bare);
    }

    #[test]
    fn test_find_word_trims_fields_but_matches_exactly() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        fs::write(store.path(), "  chat , cat\n").expect("seed");

        assert!(store.find_word("chat").expect("find").is_some());
        assert!(store.find_word("Chat").expect("find").is_none());
        assert!(store.find_word("cha").expect("find").is_none());
    }

    #[test]
    fn test_add_new_word_creates_store_and_counts_usage() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);

        let outcome = store.add("chat", &["cat".to_string()]).expect("add");
        assert_eq!(outcome, Outcome::Added);
        assert_eq!(read(&store.path()), "chat, cat\n");

        let usage = read(&usage_path(temp_dir.path(), Language::French));
        assert_eq!(usage, "word,count\nchat,1\n");
    }

    #[test]
    fn test_add_new_word_appends_at_end() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        fs::write(store.path(), "maison, house\n").expect("seed");

        store.add("chat", &["cat".to_string()]).expect("add");
        assert_eq!(read(&store.path()), "maison, house\nchat, cat\n");
    }

    #[test]
    fn test_add_multiple_translations_joined_with_comma_space() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::EnFr);

        store
            .add("house", &["maison".to_string(), "domicile".to_string()])
            .expect("add");
        assert_eq!(read(&store.path()), "house, maison, domicile\n");
    }

    #[test]
    fn test_add_completes_bare_placeholder_without_usage_increment() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        fs::write(store.path(), "avant, before\nbonjour\napres, after\n").expect("seed");

        let outcome = store.add("bonjour", &["hello".to_string()]).expect("add");
        assert_eq!(outcome, Outcome::Updated);
        assert_eq!(
            read(&store.path()),
            "avant, before\nbonjour, hello\napres, after\n"
        );

        // Only the `added` path counts usage.
        assert!(!usage_path(temp_dir.path(), Language::French).exists());
    }

    #[test]
    fn test_add_merges_new_translations_only() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        fs::write(store.path(), "maison, house\n").expect("seed");

        let outcome = store
            .add("maison", &["house".to_string(), "home".to_string()])
            .expect("add");
        assert_eq!(outcome, Outcome::Appended(1));
        assert_eq!(read(&store.path()), "maison, house, home\n");
    }

    #[test]
    fn test_add_identical_translations_is_idempotent() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        fs::write(store.path(), "maison, house, home\nchat, cat\n").expect("seed");
        let before = read(&store.path());

        let outcome = store
            .add("maison", &["house".to_string(), "home".to_string()])
            .expect("add");
        assert_eq!(outcome, Outcome::Appended(0));
        assert_eq!(read(&store.path()), before);
    }

    #[test]
    fn test_add_trailing_comma_record_is_not_bare() {
        // "chien," has one empty translation field; adding goes through the
        // merge path, not the placeholder-completion path.
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        fs::write(store.path(), "chien,\n").expect("seed");

        let outcome = store.add("chien", &["dog".to_string()]).expect("add");
        assert_eq!(outcome, Outcome::Appended(1));
        assert_eq!(read(&store.path()), "chien, , dog\n");
    }

    #[test]
    fn test_translations_of_known_word() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);
        store
            .add("chat", &["cat".to_string(), "kitty".to_string()])
            .expect("add");

        let translations = store.translations_of("chat").expect("lookup");
        assert_eq!(
            translations,
            Some(vec!["cat".to_string(), "kitty".to_string()])
        );
    }

    #[test]
    fn test_translations_of_unknown_word() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);

        assert_eq!(store.translations_of("inconnu").expect("lookup"), None);
    }

    #[test]
    fn test_directions_use_separate_stores_and_counters() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let fr_store = store(&temp_dir, Direction::FrEn);
        let en_store = store(&temp_dir, Direction::EnFr);

        fr_store.add("chat", &["cat".to_string()]).expect("add");
        en_store.add("cat", &["chat".to_string()]).expect("add");

        assert_eq!(read(&fr_store.path()), "chat, cat\n");
        assert_eq!(read(&en_store.path()), "cat, chat\n");
        assert_eq!(
            read(&usage_path(temp_dir.path(), Language::French)),
            "word,count\nchat,1\n"
        );
        assert_eq!(
            read(&usage_path(temp_dir.path(), Language::English)),
            "word,count\ncat,1\n"
        );
    }

    #[test]
    fn test_usage_counts_only_added_outcomes() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = store(&temp_dir, Direction::FrEn);

        store.add("chat", &["cat".to_string()]).expect("add");
        store.add("chat", &["kitty".to_string()]).expect("add");
        store.add("chat", &["cat".to_string()]).expect("add");

        let usage = read(&usage_path(temp_dir.path(), Language::French));
        assert_eq!(usage, "word,count\nchat,1\n");
    }
}

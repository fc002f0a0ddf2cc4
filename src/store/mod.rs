//! # Translation Store Module
//!
//! Per-direction flat-file stores mapping words to their translations.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/
//! ├── english/
//! │   ├── american-english_tofr.csv    English→French store
//! │   └── word_increment.csv           English usage counters
//! └── french/
//!     ├── french_toen.csv              French→English store
//!     └── word_increment.csv           French usage counters
//! ```
//!
//! ## Record Format
//!
//! One record per line; the word is the first field, translations follow in
//! insertion order. Fields are joined with `", "` on write and split on
//! bare `,` (each field whitespace-trimmed) on read. There is no quoting or
//! escaping; the format stays compatible with the legacy data files.
//!
//! ```text
//! maison, house, home
//! bonjour
//! chat, cat
//! ```
//!
//! A line holding only a word (like `bonjour` above) is a bare placeholder:
//! the word is known but has no translations yet.
//!
//! ## Mutation Semantics
//!
//! [`TranslationStore::add`] dispatches on a linear scan of the store:
//! a missing word is appended ([`Outcome::Added`]), a bare placeholder is
//! completed in place ([`Outcome::Updated`]), and an existing record is
//! merged order-preservingly ([`Outcome::Appended`]). Every mutation
//! rewrites the whole file through an atomic replace.

mod records;
mod storage;

pub use records::{Direction, Language, Record};
pub use storage::{
    store_path, Outcome, TranslationStore, WordMatch, EN_TO_FR_FILE, FR_TO_EN_FILE,
};

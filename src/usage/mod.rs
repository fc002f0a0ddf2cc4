//! # Usage Tracking Module
//!
//! Tracks how many times each word has been freshly added to a translation
//! store, one counter file per source language.
//!
//! ## Storage
//!
//! Counters live next to the store files, under the per-language
//! directories of the dictionary root:
//!
//! ```text
//! <root>/english/word_increment.csv
//! <root>/french/word_increment.csv
//! ```
//!
//! ## Data Format
//!
//! Plain comma-separated rows with a fixed header, in append order:
//!
//! ```text
//! word,count
//! chat,3
//! bonjour,1
//! ```
//!
//! Only the `added` outcome of a store mutation increments a counter;
//! completing a bare placeholder or appending to an existing record does
//! not.

mod storage;

pub use storage::{usage_path, UsageCounts, UsageFile, USAGE_FILE_NAME};

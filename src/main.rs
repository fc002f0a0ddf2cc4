//! # Dico CLI Entry Point
//!
//! Records word translations in a personal bilingual English/French
//! dictionary backed by flat text files.
//!
//! ## Usage
//!
//! ```bash
//! # Record a French word with its English translations
//! dico fren chat cat
//!
//! # Record an English word with several French translations
//! dico enfr house maison domicile
//!
//! # Use a specific dictionary root instead of the platform data directory
//! dico --base-dir ~/dictionaries fren bonjour hello
//! ```
//!
//! ## Behavior
//!
//! Each invocation performs exactly one add/update/append cycle:
//!
//! 1. An unknown word is appended to the store and its usage counter
//!    incremented.
//! 2. A word recorded as a bare placeholder (no translations yet) has its
//!    line completed in place.
//! 3. A word that already has translations is merged: only the genuinely
//!    new translations are appended, in the order supplied.
//!
//! Invalid input (an unknown direction token or no translations) prints an
//! error message and exits normally without touching any file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use dico::config;
use dico::store::{Direction, Outcome, TranslationStore};

/// Dico - a personal bilingual English/French dictionary
#[derive(Parser, Debug)]
#[command(name = "dico")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Record word translations in a personal bilingual dictionary", long_about = None)]
struct Args {
    /// Translation direction: 'enfr' (English to French) or 'fren' (French to English)
    direction: String,

    /// The word to record a translation for
    word: String,

    /// One or more translations of the word
    translations: Vec<String>,

    /// Dictionary root directory (defaults to the platform data directory)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    // Usage errors are printed, not raised: the process exits normally and
    // no file is created or modified.
    if args.translations.is_empty() {
        println!("Error: please provide at least one translation");
        return Ok(());
    }

    let Some(direction) = Direction::parse(&args.direction) else {
        println!(
            "Error: invalid direction '{}'. Use 'enfr' or 'fren'",
            args.direction
        );
        return Ok(());
    };

    let root = config::resolve_root(args.base_dir)?;
    let store = TranslationStore::open(root, direction)?;
    let outcome = store.add(&args.word, &args.translations)?;

    match outcome {
        Outcome::Added => println!("Added translation for '{}'", args.word),
        Outcome::Updated => println!("Updated translation for '{}'", args.word),
        Outcome::Appended(count) => {
            println!("{} new translation(s) added for '{}'", count, args.word);
        }
    }

    Ok(())
}

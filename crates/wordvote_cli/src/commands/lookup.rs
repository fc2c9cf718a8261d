//! Lookup command implementation.

use wordvote_core::{Dictionary, LookupError, ScanningDictionary, WordList};
use wordvote_server::ServerConfig;

/// Returns whether `word` is in the configured dictionary.
pub fn contains(config: &ServerConfig, word: &str) -> Result<bool, LookupError> {
    if config.scan_dictionary {
        ScanningDictionary::open(&config.dictionary_path)?.contains(word)
    } else {
        Dictionary::load(&config.dictionary_path)?.contains(word)
    }
}

/// Runs the lookup command.
pub fn run(config: &ServerConfig, word: &str) -> Result<(), Box<dyn std::error::Error>> {
    let found = contains(config, word)?;
    if found {
        println!("✓ {word:?} is in {}", config.dictionary_path.display());
    } else {
        println!("✗ {word:?} is not in {}", config.dictionary_path.display());
    }
    Ok(())
}

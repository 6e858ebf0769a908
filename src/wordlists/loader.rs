//! Word list loading utilities
//!
//! Provides functions to load raw word lists from files or embedded constants.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load words from a file, one per line
///
/// Lines are trimmed and blank lines skipped. No other filtering happens
/// here; length, alphabet and substitutions belong to the game.
///
/// # Errors
///
/// Returns [`Error::WordList`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use solvify::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::WordList {
        path: path.display().to_string(),
        source,
    })?;

    let words = parse_lines(&content);
    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use solvify::wordlists::loader::words_from_slice;
/// use solvify::wordlists::WORDLIST;
///
/// let words = words_from_slice(WORDLIST);
/// assert_eq!(words.len(), WORDLIST.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines_trims_and_skips_blanks() {
        let words = parse_lines("crane\n  slate \n\n\tirate\r\n");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_lines_keeps_raw_entries() {
        // Filtering is the game's job
        let words = parse_lines("Käse\ntoolong\nab");
        assert_eq!(words, vec!["Käse", "toolong", "ab"]);
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["crane", "slate"]);
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::WordList { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!("solvify-loader-{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["crane", "slate"]);
    }
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Newline-delimited word lists.

use std::fs;
use std::path::Path;

use crate::data_structures::{LanaiTrie, LanaiTrieConfig};
use crate::error::LanaiResult;

/// Splits text into words: one per line, trimmed, blank lines skipped.
pub fn parse_word_list(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Reads the words in the file at `path`.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> LanaiResult<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words: Vec<String> = parse_word_list(&text)
        .into_iter()
        .map(str::to_string)
        .collect();
    tracing::info!(path = %path.display(), words = words.len(), "word list read");
    Ok(words)
}

/// Reads the file at `path` and inserts every word into a new trie.
pub fn load_trie<P: AsRef<Path>>(path: P, config: LanaiTrieConfig) -> LanaiResult<LanaiTrie> {
    let words = read_word_list(path)?;
    let trie = LanaiTrie::from_words(config, &words)?;
    tracing::debug!(config = ?trie.config(), stored = trie.len(), "trie loaded");
    Ok(trie)
}

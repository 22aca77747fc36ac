// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! An in-memory prefix tree keyed by the characters of inserted words. Besides
//! insertion and membership it supports deletion that keeps shared prefixes
//! intact, longest stored prefix lookup, and derivation of the shortest prefix
//! that identifies each stored word.
//!
//! Nodes are kept in an arena and addressed by index, so deletion records the
//! path it walks instead of following parent links.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::{shortest_unique_prefix, LanaiTrie};
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("dog").unwrap();
//! trie.insert("dove").unwrap();
//! trie.insert("zebra").unwrap();
//!
//! assert!(trie.search("dove"));
//! assert!(!trie.search("do"));
//! assert_eq!(trie.longest_prefix("doghouse"), Some("dog".to_string()));
//! assert_eq!(shortest_unique_prefix(&trie), vec!["dog", "dov", "z"]);
//! ```
//!
//! # Concurrency
//!
//! The trie holds no locks. Callers that share one instance across threads
//! wrap it in a [`SharedTrie`] and take the write lock for `insert`/`delete`.

mod error;
mod node;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub use error::LanaiTrieError;
pub use node::TrieNode;
use node::NodeId;

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// A trie shared between threads behind a reader-writer lock.
pub type SharedTrie = Arc<RwLock<LanaiTrie>>;

/// Arena slot of the root node.
const ROOT: NodeId = 0;

/// Configuration options for the Lanai Trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanaiTrieConfig {
    /// Maximum number of symbols a word may have, unlimited when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Whether the empty word may be inserted (it marks the root terminal)
    pub allow_empty_words: bool,
}

impl LanaiTrieConfig {
    /// Limit the number of symbols per word.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Allow or reject insertion of the empty word.
    pub fn with_allow_empty_words(mut self, allow: bool) -> Self {
        self.allow_empty_words = allow;
        self
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            allow_empty_words: false,
        }
    }
}

/// Prefix tree over the characters of inserted words.
///
/// Key features:
/// * Counted insertion: every node remembers how many insertions passed it
/// * Deletion prunes only the tail no other word needs
/// * Longest stored prefix and shortest unique prefix queries
#[derive(Debug, Clone)]
pub struct LanaiTrie {
    /// Node arena, the root lives at index 0
    nodes: Vec<TrieNode>,

    /// Arena slots released by deletion and available for reuse
    free: Vec<NodeId>,

    /// Number of words currently stored
    word_count: usize,

    /// Number of successful deletions since creation or the last `clear`
    deletions: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            free: Vec::new(),
            word_count: 0,
            deletions: 0,
            config,
        }
    }

    /// Builds a trie from a sequence of words.
    ///
    /// # Errors
    ///
    /// Returns the first [`LanaiTrieError`] raised by [`LanaiTrie::insert`].
    pub fn from_words<I, W>(config: LanaiTrieConfig, words: I) -> LanaiTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::with_config(config);
        for word in words {
            trie.insert(word)?;
        }
        Ok(trie)
    }

    /// Wraps the trie for use from several threads.
    pub fn into_shared(self) -> SharedTrie {
        Arc::new(RwLock::new(self))
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Every node on the word's path has its count raised by one, including
    /// nodes that already existed, so inserting the same word twice counts
    /// twice.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was not stored before.
    /// * `Err(LanaiTrieError)` - If the word is empty (and empty words are
    ///   disabled) or longer than a configured `max_depth`.
    pub fn insert<W>(&mut self, word: W) -> LanaiTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        self.validate_word(word)?;

        let mut current = ROOT;
        for symbol in word.chars() {
            current = match self.nodes[current].child(symbol) {
                Some(child) => {
                    self.nodes[child].count += 1;
                    child
                }
                None => {
                    let child = self.alloc(symbol);
                    self.nodes[current].children.insert(symbol, child);
                    child
                }
            };
        }

        let leaf = &mut self.nodes[current];
        let is_new = !leaf.is_terminal;
        leaf.is_terminal = true;
        if is_new {
            self.word_count += 1;
        }

        trace!(word, is_new, "inserted word");
        Ok(is_new)
    }

    /// Returns whether `word` was inserted and not deleted since.
    ///
    /// A word that only exists as part of a longer word's path is not found.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.get_leaf(word).is_some_and(TrieNode::is_terminal)
    }

    /// Returns the node at the end of `word`'s path, terminal or not.
    ///
    /// Nothing is created when the path is missing.
    pub fn get_leaf<W>(&self, word: W) -> Option<&TrieNode>
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref()).map(|id| &self.nodes[id])
    }

    /// Removes a word from the trie.
    ///
    /// If a longer word continues past the deleted word, only the terminal
    /// mark is cleared. Otherwise the tail of the path is pruned back to the
    /// nearest ancestor that ends another word or leads to other words.
    /// Counts are left untouched.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored and has been removed, `false` if it was
    /// not stored, in which case the trie is unchanged.
    pub fn delete<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let mut current = ROOT;

        // (parent, symbol) pairs since the last terminal node on the path
        let mut path: Vec<(NodeId, char)> = Vec::new();

        for symbol in word.chars() {
            if self.nodes[current].is_terminal {
                path.clear();
            }
            path.push((current, symbol));

            match self.nodes[current].child(symbol) {
                Some(child) => current = child,
                None => {
                    trace!(word, "delete of absent word");
                    return false;
                }
            }
        }

        if !self.nodes[current].is_terminal {
            trace!(word, "delete of non-terminal path");
            return false;
        }

        self.nodes[current].is_terminal = false;
        self.word_count -= 1;
        self.deletions += 1;

        if self.nodes[current].has_children() {
            trace!(word, "cleared terminal mark, path still in use");
            return true;
        }

        let mut child = current;
        let mut pruned = 0usize;
        while let Some((parent, symbol)) = path.pop() {
            self.nodes[parent].children.remove(&symbol);
            self.release(child);
            pruned += 1;

            if self.nodes[parent].has_children() {
                break;
            }
            child = parent;
        }

        debug!(word, pruned, "deleted word");
        true
    }

    /// Returns the longest prefix of `word` that is itself a stored word.
    ///
    /// `word` counts as its own prefix. Returns `None` if no prefix is stored.
    pub fn longest_prefix<W>(&self, word: W) -> Option<String>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let mut current = ROOT;
        let mut boundary = self.nodes[ROOT].is_terminal.then_some(0);

        for (idx, symbol) in word.char_indices() {
            match self.nodes[current].child(symbol) {
                Some(child) => current = child,
                None => break,
            }
            if self.nodes[current].is_terminal {
                boundary = Some(idx + symbol.len_utf8());
            }
        }

        boundary.map(|end| word[..end].to_string())
    }

    /// Returns the shortest prefix of each stored word that no other stored
    /// word shares, in lexicographic depth-first order.
    ///
    /// A word that is a proper prefix of another stored word, or that was
    /// inserted more than once, has no such prefix and is reported whole.
    ///
    /// The answer is derived from insertion counts, which deletion does not
    /// lower. After any deletion the result may be wrong and a warning is
    /// logged.
    pub fn shortest_unique_prefixes(&self) -> Vec<String> {
        if self.deletions > 0 {
            warn!(
                deletions = self.deletions,
                "shortest unique prefixes requested after deletions, counts are stale"
            );
        }

        let mut prefixes = Vec::with_capacity(self.word_count);
        let root = &self.nodes[ROOT];
        if root.is_terminal {
            prefixes.push(String::new());
        }

        let mut stack: Vec<(NodeId, String)> = root
            .children
            .iter()
            .rev()
            .map(|(&symbol, &child)| (child, symbol.to_string()))
            .collect();

        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id];
            if node.count == 1 {
                prefixes.push(prefix);
                continue;
            }

            if node.is_terminal {
                prefixes.push(prefix.clone());
            }
            for (&symbol, &child) in node.children.iter().rev() {
                let mut next = prefix.clone();
                next.push(symbol);
                stack.push((child, next));
            }
        }

        prefixes
    }

    /// Returns every stored word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        self.collect_words(ROOT, String::new(), &mut words);
        words
    }

    /// Returns the stored words that start with `prefix`, in lexicographic
    /// order.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut words = Vec::new();
        if let Some(start) = self.find_node(prefix) {
            self.collect_words(start, prefix.to_string(), &mut words);
        }
        words
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Removes every word and resets all counts.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::root());
        self.free.clear();
        self.word_count = 0;
        self.deletions = 0;
    }

    fn validate_word(&self, word: &str) -> LanaiTrieResult<()> {
        if word.is_empty() && !self.config.allow_empty_words {
            return Err(LanaiTrieError::EmptyWord);
        }
        if let Some(max_depth) = self.config.max_depth {
            let length = word.chars().count();
            if length > max_depth {
                return Err(LanaiTrieError::WordTooLong { length, max_depth });
            }
        }
        Ok(())
    }

    fn find_node(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(ROOT, |id, symbol| self.nodes[id].child(symbol))
    }

    fn collect_words(&self, start: NodeId, seed: String, words: &mut Vec<String>) {
        let mut stack = vec![(start, seed)];
        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id];
            for (&symbol, &child) in node.children.iter().rev() {
                let mut next = prefix.clone();
                next.push(symbol);
                stack.push((child, next));
            }
            if node.is_terminal {
                words.push(prefix);
            }
        }
    }

    fn alloc(&mut self, symbol: char) -> NodeId {
        let node = TrieNode::with_symbol(symbol);
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id].children.clear();
        self.free.push(id);
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the shortest unique prefix of every word stored in `trie`.
///
/// See [`LanaiTrie::shortest_unique_prefixes`].
pub fn shortest_unique_prefix(trie: &LanaiTrie) -> Vec<String> {
    trie.shortest_unique_prefixes()
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Nodes live in an arena owned by the trie and refer to their children by
//! [`NodeId`]. There are no parent links; deletion records the path it walks.

use std::collections::BTreeMap;

/// Index of a node inside the trie arena.
pub(crate) type NodeId = usize;

/// A node in the Lanai Trie.
///
/// Each non-root node represents one symbol on the path of at least one
/// inserted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Symbol this node represents, `None` for the root sentinel
    pub(crate) symbol: Option<char>,

    /// Map of symbols to child nodes
    pub(crate) children: BTreeMap<char, NodeId>,

    /// Whether some inserted word ends exactly here
    pub(crate) is_terminal: bool,

    /// Number of insertions whose path passed through this node
    pub(crate) count: usize,
}

impl TrieNode {
    /// Creates the root sentinel node.
    pub(crate) fn root() -> Self {
        Self {
            symbol: None,
            children: BTreeMap::new(),
            is_terminal: false,
            count: 0,
        }
    }

    /// Creates a node for `symbol` that has been reached by one insertion.
    pub(crate) fn with_symbol(symbol: char) -> Self {
        Self {
            symbol: Some(symbol),
            children: BTreeMap::new(),
            is_terminal: false,
            count: 1,
        }
    }

    /// Returns the child id for `symbol`, if present.
    pub(crate) fn child(&self, symbol: char) -> Option<NodeId> {
        self.children.get(&symbol).copied()
    }

    /// The symbol this node represents, or `None` for the root.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Number of insertions that passed through this node.
    ///
    /// The value tracks insertion history. Deletions do not lower it.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether any longer word continues past this node.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Symbols of the direct children in ascending order.
    pub fn child_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }
}

// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the Lanai Trie.

use std::io;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use test_case::test_case;
use tracing_subscriber::fmt::MakeWriter;

use crate::data_structures::lanai_trie::{
    shortest_unique_prefix, LanaiTrie, LanaiTrieConfig, LanaiTrieError,
};

fn trie_with(words: &[&str]) -> LanaiTrie {
    LanaiTrie::from_words(LanaiTrieConfig::default(), words).unwrap()
}

/// Log sink shared with a test subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Counts along a word's path, root excluded.
fn path_counts(trie: &LanaiTrie, word: &str) -> Vec<usize> {
    word.char_indices()
        .map(|(idx, c)| trie.get_leaf(&word[..idx + c.len_utf8()]).unwrap().count())
        .collect()
}

#[test]
fn test_insert_search() {
    let mut trie = LanaiTrie::new();
    assert!(trie.is_empty());

    assert!(trie.insert("hello").unwrap());
    assert!(trie.insert("world").unwrap());
    assert_eq!(trie.len(), 2);

    assert!(trie.search("hello"));
    assert!(trie.search("world"));
    assert!(!trie.search("foobar"));
}

#[test]
fn test_insert_counts() {
    let trie = trie_with(&["hello", "hel"]);
    assert_eq!(path_counts(&trie, "hello"), vec![2, 2, 2, 1, 1]);
}

#[test]
fn test_reinsert_counts_but_stays_terminal() {
    let mut trie = LanaiTrie::new();
    assert!(trie.insert("abc").unwrap());
    assert!(!trie.insert("abc").unwrap());

    assert_eq!(trie.len(), 1);
    assert!(trie.search("abc"));
    assert_eq!(path_counts(&trie, "abc"), vec![2, 2, 2]);
}

#[test]
fn test_search_does_not_match_substring() {
    let trie = trie_with(&["helloworldandallwhoinhabitit", "helloworld"]);
    assert!(!trie.search("hello"));
    assert!(!trie.search("helloworldand"));
    assert!(trie.search("helloworld"));
    assert!(trie.search("helloworldandallwhoinhabitit"));
}

#[test]
fn test_get_leaf_does_not_create_nodes() {
    let trie = trie_with(&["hello"]);

    let node = trie.get_leaf("hel").unwrap();
    assert_eq!(node.symbol(), Some('l'));
    assert!(!node.is_terminal());
    assert!(node.has_children());

    assert!(trie.get_leaf("help").is_none());
    assert!(trie.get_leaf("help").is_none());
    assert_eq!(trie.words(), vec!["hello"]);
}

#[test]
fn test_delete() {
    let mut trie = trie_with(&["hello"]);
    assert!(trie.delete("hello"));
    assert!(!trie.search("hello"));
    assert!(trie.is_empty());
    assert!(trie.get_leaf("h").is_none());
}

#[test]
fn test_delete_substring() {
    let mut trie = trie_with(&["hello", "helloworld"]);
    assert!(trie.delete("hello"));
    assert!(!trie.search("hello"));
    assert!(trie.search("helloworld"));
    assert!(trie.get_leaf("hello").unwrap().has_children());
}

#[test]
fn test_delete_with_prefix_intact() {
    let mut trie = trie_with(&["hello", "helloworld"]);
    assert!(trie.delete("helloworld"));
    assert!(!trie.search("helloworld"));
    assert!(trie.search("hello"));
    assert!(!trie.get_leaf("hello").unwrap().has_children());
    assert!(trie.get_leaf("hellow").is_none());
}

#[test]
fn test_delete_keeps_sibling_branch() {
    let mut trie = trie_with(&["abc", "abd"]);
    assert!(trie.delete("abc"));

    assert!(!trie.search("abc"));
    assert!(trie.search("abd"));
    assert!(trie.get_leaf("abc").is_none());
    assert_eq!(trie.get_leaf("ab").unwrap().child_symbols().collect::<String>(), "d");
}

#[test]
fn test_delete_absent_is_noop() {
    let mut trie = trie_with(&["hello", "help"]);
    let before = trie.words();

    assert!(!trie.delete("world"));
    assert!(!trie.delete("hel"));
    assert!(!trie.delete("helloo"));

    assert_eq!(trie.words(), before);
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_delete_twice() {
    let mut trie = trie_with(&["hello"]);
    assert!(trie.delete("hello"));
    assert!(!trie.delete("hello"));
}

#[test]
fn test_reinsert_after_delete() {
    let mut trie = trie_with(&["hello", "help"]);
    assert!(trie.delete("hello"));
    assert!(trie.insert("hello").unwrap());

    assert!(trie.search("hello"));
    assert!(trie.search("help"));
    assert_eq!(trie.words(), vec!["hello", "help"]);
}

#[test]
fn test_longest_prefix() {
    let trie = trie_with(&["hello", "helloworld"]);
    assert_eq!(trie.longest_prefix("helloworld").as_deref(), Some("helloworld"));
    assert_eq!(
        trie.longest_prefix("helloworldandallwhoinhabitit").as_deref(),
        Some("helloworld")
    );
    assert_eq!(trie.longest_prefix("hellow").as_deref(), Some("hello"));
    assert_eq!(trie.longest_prefix("foobar"), None);
    assert_eq!(trie.longest_prefix("hell"), None);
}

#[test]
fn test_longest_prefix_multibyte() {
    let trie = trie_with(&["hé", "héllo"]);
    assert_eq!(trie.longest_prefix("héllø").as_deref(), Some("hé"));
    assert_eq!(trie.longest_prefix("héllos").as_deref(), Some("héllo"));
}

#[test_case(&["zebra", "dog", "duck", "dove"], &["dog", "dov", "du", "z"]; "classic")]
#[test_case(&["hel", "hello"], &["hel", "hell"]; "word is prefix of another")]
#[test_case(&["abc", "abc", "abd"], &["abc", "abd"]; "duplicate insertion")]
#[test_case(&["solo"], &["s"]; "single word")]
#[test_case(&[], &[]; "empty trie")]
fn test_shortest_unique_prefix(words: &[&str], expected: &[&str]) {
    let trie = trie_with(words);
    assert_eq!(shortest_unique_prefix(&trie), expected);
}

#[test]
fn test_empty_word_rejected_by_default() {
    let mut trie = LanaiTrie::new();
    assert_eq!(trie.insert(""), Err(LanaiTrieError::EmptyWord));
    assert!(trie.is_empty());
    assert!(!trie.search(""));
}

#[test]
fn test_empty_word_allowed() {
    let config = LanaiTrieConfig::default().with_allow_empty_words(true);
    let mut trie = LanaiTrie::with_config(config);

    assert!(trie.insert("").unwrap());
    assert!(trie.insert("a").unwrap());
    assert!(trie.search(""));
    assert_eq!(trie.longest_prefix("xyz").as_deref(), Some(""));
    assert_eq!(trie.shortest_unique_prefixes(), vec!["", "a"]);

    assert!(trie.delete(""));
    assert!(!trie.search(""));
    assert!(trie.search("a"));
}

#[test]
fn test_long_word_accepted_by_default() {
    let word = "a".repeat(300);
    let mut trie = LanaiTrie::new();

    assert!(trie.insert(&word).unwrap());
    assert!(trie.search(&word));
    assert_eq!(trie.longest_prefix(format!("{word}b")).as_deref(), Some(word.as_str()));
    assert_eq!(trie.shortest_unique_prefixes(), vec!["a"]);
}

#[test]
fn test_word_too_long() {
    let config = LanaiTrieConfig::default().with_max_depth(3);
    let mut trie = LanaiTrie::with_config(config);
    assert_eq!(trie.config().max_depth, Some(3));

    assert!(trie.insert("abc").unwrap());
    assert_eq!(
        trie.insert("abcd"),
        Err(LanaiTrieError::WordTooLong {
            length: 4,
            max_depth: 3,
        })
    );
    assert!(!trie.search("abcd"));
}

#[test]
fn test_delete_keeps_counts() {
    let mut trie = trie_with(&["hello", "helloworld"]);
    assert!(trie.delete("helloworld"));

    assert!(trie.get_leaf("hellow").is_none());
    assert_eq!(path_counts(&trie, "hello"), vec![2, 2, 2, 2, 2]);
}

#[test]
fn test_unique_prefixes_after_delete_use_stale_counts() {
    let mut trie = trie_with(&["abc", "abd"]);
    assert!(trie.delete("abd"));

    // "a" would do for the lone word, but the shared path still counts 2
    assert_eq!(path_counts(&trie, "abc"), vec![2, 2, 1]);
    assert_eq!(trie.shortest_unique_prefixes(), vec!["abc"]);
}

#[test]
fn test_unique_prefixes_warn_after_delete() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();

    let mut trie = trie_with(&["abc", "abd"]);
    tracing::subscriber::with_default(subscriber, || {
        trie.shortest_unique_prefixes();
        assert!(logs.contents().is_empty());

        trie.delete("abd");
        trie.shortest_unique_prefixes();
    });

    let output = logs.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("counts are stale"));
}

#[test_case(&["zebra", "dog", "duck", "dove"]; "distinct words")]
#[test_case(&["hel", "hello", "help"]; "word is prefix of another")]
#[test_case(&["abc", "abc", "abd", "b", "b"]; "duplicate insertions")]
fn test_unique_prefixes_align_with_words(words: &[&str]) {
    let trie = trie_with(words);
    let stored = trie.words();
    let prefixes = trie.shortest_unique_prefixes();

    assert_eq!(stored.len(), prefixes.len());
    for (word, prefix) in stored.iter().zip(&prefixes) {
        assert!(word.starts_with(prefix.as_str()), "{prefix} does not prefix {word}");
    }
}

#[test]
fn test_words_with_prefix() {
    let trie = trie_with(&["apple", "application", "apply", "banana"]);

    assert_eq!(
        trie.words_with_prefix("app"),
        vec!["apple", "application", "apply"]
    );
    assert_eq!(trie.words_with_prefix("apple"), vec!["apple"]);
    assert!(trie.words_with_prefix("orange").is_empty());
    assert_eq!(trie.words_with_prefix("").len(), 4);
}

#[test]
fn test_clear() {
    let mut trie = trie_with(&["alpha", "beta"]);
    trie.delete("alpha");
    trie.clear();

    assert!(trie.is_empty());
    assert!(trie.words().is_empty());
    assert!(trie.get_leaf("b").is_none());
}

#[test]
fn test_shared_trie_across_threads() {
    const THREAD_COUNT: usize = 4;
    const WORDS_PER_THREAD: usize = 25;

    let trie = LanaiTrie::new().into_shared();

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let trie = trie.clone();
            thread::spawn(move || {
                for j in 0..WORDS_PER_THREAD {
                    let word = format!("word_{thread_id}_{j}");
                    trie.write().insert(&word).unwrap();
                    assert!(trie.read().search(&word));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(trie.read().len(), THREAD_COUNT * WORDS_PER_THREAD);
}

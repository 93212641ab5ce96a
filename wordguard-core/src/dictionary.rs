// wordguard-core/src/dictionary.rs
//! Prefix-tree dictionary of flagged words.
//!
//! Every node maps a single `char` to its child and carries a terminal flag
//! marking the end of an inserted word. The tree is case-sensitive: callers
//! insert and query canonical (lowercased, optionally normalized) text only.
//!

use std::collections::HashMap;

/// A single node of the prefix tree.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// True when an inserted word ends at this node.
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

/// The flagged-word prefix tree.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    root: TrieNode,
    word_count: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `word`, creating the chain of nodes it needs.
    ///
    /// Inserting `""` marks the root terminal, which makes every free-scan
    /// position a match. The facade never does this.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// True only if `word` is an inserted entry. A proper prefix of an entry
    /// does not count.
    pub fn contains_exact(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word
    }

    /// True if any entry occurs anywhere inside `text`.
    ///
    /// Tries a walk from every start offset and stops at the first terminal
    /// node reached. Quadratic in the worst case.
    pub fn contains_anywhere(&self, text: &[char]) -> bool {
        (0..text.len()).any(|start| self.first_match_at(text, start))
    }

    fn first_match_at(&self, text: &[char], start: usize) -> bool {
        let mut node = &self.root;
        for &c in &text[start..] {
            match node.child(c) {
                Some(next) if next.is_word => return true,
                Some(next) => node = next,
                None => return false,
            }
        }
        false
    }

    /// Length of the longest entry that begins exactly at `offset`, or 0.
    pub fn longest_match_at(&self, text: &[char], offset: usize) -> usize {
        let Some(tail) = text.get(offset..) else {
            return 0;
        };

        let mut node = &self.root;
        let mut longest = 0;
        for (walked, &c) in tail.iter().enumerate() {
            match node.child(c) {
                Some(next) => node = next,
                None => break,
            }
            if node.is_word {
                longest = walked + 1;
            }
        }
        longest
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_contains_exact_rejects_prefixes() {
        let dict: Dictionary = ["badword"].into_iter().collect();
        assert!(dict.contains_exact("badword"));
        assert!(!dict.contains_exact("bad"));
        assert!(!dict.contains_exact("badwords"));
        assert!(!dict.contains_exact(""));
    }

    #[test]
    fn test_duplicates_counted_once() {
        let dict: Dictionary = ["nasty", "nasty", "bad"].into_iter().collect();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_contains_anywhere() {
        let dict: Dictionary = ["bad"].into_iter().collect();
        assert!(dict.contains_anywhere(&chars("notbadatall")));
        assert!(!dict.contains_anywhere(&chars("ba d")));
        assert!(!dict.contains_anywhere(&[]));
    }

    #[test]
    fn test_longest_match_prefers_longer_entry() {
        let dict: Dictionary = ["ass", "assassin"].into_iter().collect();
        let text = chars("assassin!");
        assert_eq!(dict.longest_match_at(&text, 0), 8);
        assert_eq!(dict.longest_match_at(&text, 3), 3);
        assert_eq!(dict.longest_match_at(&text, 1), 0);
    }

    #[test]
    fn test_longest_match_keeps_last_terminal_seen() {
        // "assa" is walked but is not an entry, so the match falls back to "ass".
        let dict: Dictionary = ["ass", "assassin"].into_iter().collect();
        assert_eq!(dict.longest_match_at(&chars("assault"), 0), 3);
    }

    #[test]
    fn test_longest_match_out_of_range_offset() {
        let dict: Dictionary = ["a"].into_iter().collect();
        assert_eq!(dict.longest_match_at(&chars("a"), 5), 0);
    }

    #[test]
    fn test_empty_dictionary_never_matches() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.contains_anywhere(&chars("anything")));
        assert_eq!(dict.longest_match_at(&chars("anything"), 0), 0);
    }
}

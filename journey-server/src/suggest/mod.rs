//! Prefix index for autocomplete suggestions.
//!
//! A trie over station names, station codes and review keywords. Keys are
//! lower-cased on insert and lookup; a terminal node carries an accumulated
//! popularity score, so inserting the same key again raises its rank
//! instead of being rejected as a duplicate.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::StationCode;

/// One node of the trie. Children are kept in a `BTreeMap` so collection
/// walks visit keys in lexicographic order.
#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
    score: u64,
    station: Option<StationCode>,
}

/// A ranked autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub score: u64,
    /// Set when the suggestion is a station name or code.
    pub station: Option<StationCode>,
}

/// The prefix index.
///
/// Insert and prefix walk are O(key length); collecting the suggestion
/// list under a prefix is linear in the total length of the matches.
#[derive(Debug, Default)]
pub struct SuggestIndex {
    root: TrieNode,
    terminals: usize,
}

impl SuggestIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, adding `score` to its accumulated popularity.
    pub fn insert(&mut self, key: &str, score: u64) {
        self.insert_node(key, score, None);
    }

    /// Insert a key that resolves to a station.
    ///
    /// The station payload follows first-registration-wins semantics, like
    /// station payloads in the graph; the score still accumulates.
    pub fn insert_station(&mut self, key: &str, score: u64, station: StationCode) {
        self.insert_node(key, score, Some(station));
    }

    fn insert_node(&mut self, key: &str, score: u64, station: Option<StationCode>) {
        let key = key.to_lowercase();
        if key.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }

        if !node.terminal {
            node.terminal = true;
            self.terminals += 1;
        }
        node.score += score;
        if node.station.is_none() {
            node.station = station;
        }
    }

    /// Number of distinct keys in the index.
    pub fn len(&self) -> usize {
        self.terminals
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    /// Ranked suggestions for a prefix, at most `limit` of them.
    ///
    /// Ordered by descending score; equal scores fall back to lexicographic
    /// order so results are reproducible. An unknown prefix yields an
    /// empty vec.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        let prefix = prefix.to_lowercase();

        let mut node = &self.root;
        for c in prefix.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        // Collect every terminal under the prefix node with an explicit
        // stack; children are pushed in reverse so lexicographically
        // smaller keys are visited first.
        let mut suggestions = Vec::new();
        let mut stack: Vec<(&TrieNode, String)> = vec![(node, prefix)];

        while let Some((node, text)) = stack.pop() {
            if node.terminal {
                suggestions.push(Suggestion {
                    text: text.clone(),
                    score: node.score,
                    station: node.station,
                });
            }
            for (&c, child) in node.children.iter().rev() {
                let mut next = text.clone();
                next.push(c);
                stack.push((child, next));
            }
        }

        // Stable sort keeps the lexicographic visit order within a score
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions.truncate(limit);
        suggestions
    }
}

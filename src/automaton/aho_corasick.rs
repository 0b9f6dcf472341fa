// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Aho-Corasick: every keyword in one pass over the text.
//!
//! The trie lives in an arena (`Vec<Node>`), so child edges and failure links
//! are plain indices and the back-edges never fight the borrow checker. Node 0
//! is the root.
//!
//! Lifecycle is strict: `add_keyword` for every keyword, one `build`, then
//! any number of `search` calls. Breaking that order is a programming error
//! and panics rather than returning silently wrong matches.
//!
//! # Invariants (checked in debug builds by `contracts`)
//!
//! - Every non-root node has exactly one parent.
//! - `depth(fail(v)) < depth(v)` for every non-root node, so failure links
//!   form a tree rooted at 0.
//! - `outputs(v) ⊇ outputs(fail(v))`.

use std::collections::{HashMap, VecDeque};

use crate::contracts::check_automaton_well_formed;

/// Index of a node in the arena.
pub type NodeId = usize;

/// Index of a keyword in insertion order.
pub type KeywordId = usize;

pub(crate) const ROOT: NodeId = 0;

/// One trie state.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(crate) children: HashMap<char, NodeId>,
    pub(crate) fail: NodeId,
    pub(crate) depth: usize,
    /// Keywords ending here, own terminal first, then those inherited via `fail`.
    pub(crate) outputs: Vec<KeywordId>,
}

impl Node {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn fail(&self) -> NodeId {
        self.fail
    }

    pub fn outputs(&self) -> &[KeywordId] {
        &self.outputs
    }
}

/// Multi-pattern automaton over `char`s.
#[derive(Debug, Clone)]
pub struct AhoCorasick {
    nodes: Vec<Node>,
    keywords: Vec<String>,
    keyword_ids: HashMap<String, KeywordId>,
    built: bool,
}

impl Default for AhoCorasick {
    fn default() -> Self {
        Self::new()
    }
}

impl AhoCorasick {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
            keywords: Vec::new(),
            keyword_ids: HashMap::new(),
            built: false,
        }
    }

    /// Insert all keywords and build in one go.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self::new();
        for keyword in keywords {
            automaton.add_keyword(keyword.as_ref());
        }
        automaton.build();
        automaton
    }

    /// Insert `keyword` into the trie.
    ///
    /// Re-adding a keyword is a no-op and returns the existing id. Empty
    /// keywords are ignored (`None`): they would otherwise match everywhere.
    ///
    /// # Panics
    ///
    /// Panics if called after [`build`](Self::build).
    pub fn add_keyword(&mut self, keyword: &str) -> Option<KeywordId> {
        assert!(!self.built, "add_keyword called after build()");
        if keyword.is_empty() {
            return None;
        }
        if let Some(&id) = self.keyword_ids.get(keyword) {
            return Some(id);
        }

        let mut node = ROOT;
        for c in keyword.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    let depth = self.nodes[node].depth + 1;
                    self.nodes.push(Node::new(depth));
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }

        let id = self.keywords.len();
        self.keywords.push(keyword.to_string());
        self.keyword_ids.insert(keyword.to_string(), id);
        self.nodes[node].outputs.push(id);
        Some(id)
    }

    /// Compute failure links and merged output sets with one BFS.
    ///
    /// Parents are dequeued before children, so a node's failure target
    /// (always shallower) already has its final output set when merged.
    ///
    /// # Panics
    ///
    /// Panics if called twice.
    pub fn build(&mut self) {
        assert!(!self.built, "build() called twice");

        let mut queue = VecDeque::new();
        let depth_one: Vec<NodeId> = self.nodes[ROOT].children.values().copied().collect();
        for child in depth_one {
            self.nodes[child].fail = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(char, NodeId)> = self.nodes[current]
                .children
                .iter()
                .map(|(&c, &n)| (c, n))
                .collect();

            for (c, child) in edges {
                queue.push_back(child);

                let mut fallback = self.nodes[current].fail;
                let target = loop {
                    if let Some(&next) = self.nodes[fallback].children.get(&c) {
                        break next;
                    }
                    if fallback == ROOT {
                        break ROOT;
                    }
                    fallback = self.nodes[fallback].fail;
                };

                self.nodes[child].fail = target;
                let inherited = self.nodes[target].outputs.clone();
                self.nodes[child].outputs.extend(inherited);
            }
        }

        self.built = true;
        check_automaton_well_formed(self);
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Keywords in insertion order; a `KeywordId` indexes this slice.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk `text` once, calling `on_match(keyword, end_index)` for every hit.
    ///
    /// # Panics
    ///
    /// Panics if [`build`](Self::build) has not been called.
    pub fn for_each_match<F>(&self, text: &str, mut on_match: F)
    where
        F: FnMut(KeywordId, usize),
    {
        assert!(self.built, "search called before build()");

        let mut state = ROOT;
        for (i, c) in text.chars().enumerate() {
            state = self.step(state, c);
            for &keyword in &self.nodes[state].outputs {
                on_match(keyword, i);
            }
        }
    }

    #[inline]
    fn step(&self, mut state: NodeId, c: char) -> NodeId {
        loop {
            if let Some(&next) = self.nodes[state].children.get(&c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].fail;
        }
    }

    /// Every keyword found in `text`, with the 0-based end index (in chars)
    /// of each occurrence in ascending order. Keywords without a hit are absent.
    ///
    /// ```
    /// use cvsift::AhoCorasick;
    ///
    /// let ac = AhoCorasick::from_keywords(["he", "she", "hers"]);
    /// let hits = ac.search("ushers");
    /// assert_eq!(hits["she"], vec![3]);
    /// assert_eq!(hits["he"], vec![3]);
    /// assert_eq!(hits["hers"], vec![5]);
    /// ```
    pub fn search(&self, text: &str) -> HashMap<String, Vec<usize>> {
        let mut hits: HashMap<String, Vec<usize>> = HashMap::new();
        self.for_each_match(text, |keyword, end| {
            hits.entry(self.keywords[keyword].clone())
                .or_default()
                .push(end);
        });
        hits
    }

    /// Occurrence count per keyword id, without materializing positions.
    pub fn count_matches(&self, text: &str) -> Vec<usize> {
        let mut counts = vec![0; self.keywords.len()];
        self.for_each_match(text, |keyword, _| counts[keyword] += 1);
        counts
    }
}

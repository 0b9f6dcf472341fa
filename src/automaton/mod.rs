// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Multi-pattern matching.
//!
//! The Aho-Corasick automaton scans each document once for the whole keyword
//! list, instead of once per keyword. The cache lets repeated queries over the
//! same keyword set skip construction.

mod aho_corasick;
mod cache;

pub use aho_corasick::{AhoCorasick, KeywordId, Node, NodeId};
pub use cache::AutomatonCache;

pub(crate) use aho_corasick::ROOT;

// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how match records get ordered.
//!
//! The key insight is that breadth beats depth. A document's score is how
//! many of the query's keywords it matched, not how often it repeated them.

pub mod ranking;

pub use ranking::{compare_records, rank_records};

// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how match records get sorted.
//!
//! The score is the number of distinct keywords (exact or fuzzy) a document
//! matched. Occurrence counts do not matter: a resume that says "python"
//! twenty times and nothing else still ranks below one that mentions python
//! and sql once each.
//!
//! There is no secondary key. Equal scores keep the order in
//! which their records were created (exact-phase records in document order,
//! then records the fuzzy phase created), which `sort_by` guarantees because
//! it is stable.

use std::cmp::Ordering;

use crate::contracts::{check_record_counts, check_sorted_by_match_count};
use crate::types::MatchRecord;

/// Compare two records for ranking: higher `match_count` first.
///
/// Returns `Equal` on a tie so the caller's stable sort keeps encounter order.
pub fn compare_records(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    b.match_count.cmp(&a.match_count)
}

/// Recount, sort and truncate to `top_n`.
pub fn rank_records(mut records: Vec<MatchRecord>, top_n: usize) -> Vec<MatchRecord> {
    for record in &mut records {
        record.recount();
    }
    check_record_counts(&records);

    records.sort_by(compare_records);
    records.truncate(top_n);

    check_sorted_by_match_count(&records);
    records
}

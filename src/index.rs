//! Join index over track entries.
//!
//! Built once per computation and shared by reference with every downstream
//! calculator: `(spotifyUri, roundId)` → submitting entry, plus per-entry
//! vote totals.

use std::collections::HashMap;

use crate::models::{Submission, TrackKey, Vote};
use crate::store::RecordStore;

/// Aggregated votes for one track entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntryVotes {
    pub points: i64,
    pub voters: usize,
}

#[derive(Debug)]
pub struct JoinIndex<'a> {
    /// Last submission seen for each key (duplicate keys: last write wins)
    entries: HashMap<TrackKey<'a>, &'a Submission>,
    totals: HashMap<TrackKey<'a>, EntryVotes>,
    dangling_votes: usize,
}

impl<'a> JoinIndex<'a> {
    pub fn build(store: &'a RecordStore) -> Self {
        let mut entries = HashMap::with_capacity(store.submissions().len());
        for sub in store.submissions() {
            entries.insert(sub.key(), sub);
        }

        let mut totals: HashMap<TrackKey<'a>, EntryVotes> = HashMap::new();
        let mut dangling_votes = 0;
        for vote in store.votes() {
            let t = totals.entry(vote.key()).or_default();
            t.points = t.points.saturating_add(vote.points);
            t.voters += 1;
            if !entries.contains_key(&vote.key()) {
                dangling_votes += 1;
            }
        }

        log::debug!(
            "Join index: {} track entries, {} voted keys, {} dangling votes",
            entries.len(),
            totals.len(),
            dangling_votes
        );

        Self {
            entries,
            totals,
            dangling_votes,
        }
    }

    /// The submission a key resolves to.
    pub fn submission_of(&self, key: TrackKey<'_>) -> Option<&'a Submission> {
        self.entries.get(&key).copied()
    }

    pub fn submitter_of(&self, key: TrackKey<'_>) -> Option<&'a str> {
        self.submission_of(key).map(|s| s.submitter_id.as_str())
    }

    /// Submitter receiving a vote, or `None` for a dangling vote.
    pub fn recipient(&self, vote: &Vote) -> Option<&'a str> {
        self.submitter_of(vote.key())
    }

    /// Recipient of a vote, excluding self-votes. Used by pairwise rules.
    pub fn other_recipient(&self, vote: &Vote) -> Option<&'a str> {
        self.recipient(vote).filter(|&s| s != vote.voter_id)
    }

    /// Σ points of every vote cast for the key (0 when none).
    pub fn points_of(&self, key: TrackKey<'_>) -> i64 {
        self.totals.get(&key).map(|t| t.points).unwrap_or(0)
    }

    /// Number of votes cast for the key (0 when none).
    pub fn voter_count_of(&self, key: TrackKey<'_>) -> usize {
        self.totals.get(&key).map(|t| t.voters).unwrap_or(0)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn dangling_votes(&self) -> usize {
        self.dangling_votes
    }
}

use std::collections::HashMap;

use serde::Serialize;

use crate::index::JoinIndex;
use crate::models::{Competitor, Round, Submission, Vote};
use crate::store::RecordStore;
use crate::tally::Tally;

/// A competitor's points within one round.
#[derive(Debug, Clone, Serialize)]
pub struct Standing<'a> {
    pub competitor: &'a Competitor,
    pub points: i64,
    /// First submission this competitor made in the round.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<&'a Submission>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundResult<'a> {
    pub round: &'a Round,
    pub standings: Vec<Standing<'a>>,
}

impl RoundResult<'_> {
    /// Zero-based finishing position of a competitor, if they placed.
    pub fn position_of(&self, competitor_id: &str) -> Option<usize> {
        self.standings
            .iter()
            .position(|s| s.competitor.id == competitor_id)
    }

    pub fn winner(&self) -> Option<&Competitor> {
        self.standings.first().map(|s| s.competitor)
    }
}

/// Rank submitters within every round, in round-table order.
///
/// Points are summed per submitter from the round's resolving votes
/// (self-votes included). Standings sort by points descending; ties keep
/// the order in which submitters first received a vote.
pub fn round_results<'a>(store: &'a RecordStore, index: &JoinIndex<'a>) -> Vec<RoundResult<'a>> {
    let mut votes_by_round: HashMap<&str, Vec<&Vote>> = HashMap::new();
    for vote in store.votes() {
        votes_by_round.entry(vote.round_id.as_str()).or_default().push(vote);
    }

    // First submission per (round, submitter)
    let mut first_submission: HashMap<(&str, &str), &Submission> = HashMap::new();
    for sub in store.submissions() {
        first_submission
            .entry((sub.round_id.as_str(), sub.submitter_id.as_str()))
            .or_insert(sub);
    }

    store
        .rounds()
        .iter()
        .map(|round| {
            let mut points: Tally<&str, i64> = Tally::new();
            let round_votes = votes_by_round.get(round.id.as_str());
            for vote in round_votes.into_iter().flatten() {
                if let Some(submitter) = index.recipient(vote) {
                    points.add(submitter, vote.points);
                }
            }

            let mut standings: Vec<Standing<'a>> = points
                .into_entries()
                .into_iter()
                .filter_map(|(submitter, pts)| {
                    store.competitor(submitter).map(|competitor| Standing {
                        competitor,
                        points: pts,
                        submission: first_submission
                            .get(&(round.id.as_str(), submitter))
                            .copied(),
                    })
                })
                .collect();
            standings.sort_by(|a, b| b.points.cmp(&a.points));

            RoundResult { round, standings }
        })
        .collect()
}

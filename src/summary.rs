use serde::Serialize;

use crate::store::RecordStore;

/// Headline counts for a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSummary {
    pub competitors: usize,
    pub rounds: usize,
    pub submissions: usize,
    pub votes: usize,
    /// Σ points over every vote row, resolved or not.
    pub total_points: i64,
}

pub fn league_summary(store: &RecordStore) -> LeagueSummary {
    LeagueSummary {
        competitors: store.competitors().len(),
        rounds: store.rounds().len(),
        submissions: store.submissions().len(),
        votes: store.votes().len(),
        total_points: store
            .votes()
            .iter()
            .fold(0i64, |acc, v| acc.saturating_add(v.points)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::LeagueBuilder;

    #[test]
    fn test_counts_raw_rows() {
        let store = LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .round("r1", "")
            .submit("a", "t", "r1")
            .vote("b", "t", "r1", 5)
            .vote("b", "dangling", "r1", -2)
            .build();
        let summary = league_summary(&store);
        assert_eq!(
            summary,
            LeagueSummary {
                competitors: 2,
                rounds: 1,
                submissions: 1,
                votes: 2,
                total_points: 3,
            }
        );
    }
}

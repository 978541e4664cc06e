use std::collections::HashMap;

use serde::Serialize;

use crate::index::JoinIndex;
use crate::models::Competitor;
use crate::standings::RoundResult;
use crate::store::RecordStore;
use crate::tally::Tally;

/// Finishing positions (zero-based) counted as a top-three finish.
const PODIUM_POSITIONS: usize = 3;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry<'a> {
    pub competitor: &'a Competitor,
    pub total_points: i64,
    pub rounds_played: usize,
    pub average_points: f64,
    pub wins: usize,
    pub top_three_finishes: usize,
}

/// Submitter id → (round id → points earned in that round).
pub type PointsByRound<'a> = HashMap<&'a str, Tally<&'a str, i64>>;

/// Replay every resolving vote into per-submitter, per-round point totals.
pub fn points_by_round<'a>(store: &'a RecordStore, index: &JoinIndex<'a>) -> PointsByRound<'a> {
    let mut by_submitter: PointsByRound<'a> = HashMap::new();
    for vote in store.votes() {
        if let Some(submitter) = index.recipient(vote) {
            by_submitter
                .entry(submitter)
                .or_default()
                .add(vote.round_id.as_str(), vote.points);
        }
    }
    by_submitter
}

/// Aggregate per-competitor totals across all rounds.
///
/// Sorted by total points descending; ties keep competitor-table order.
pub fn leaderboard<'a>(
    store: &'a RecordStore,
    index: &JoinIndex<'a>,
    results: &[RoundResult<'a>],
) -> Vec<LeaderboardEntry<'a>> {
    let rounds = points_by_round(store, index);

    let mut wins: HashMap<&str, usize> = HashMap::new();
    let mut podiums: HashMap<&str, usize> = HashMap::new();
    for result in results {
        for (pos, standing) in result.standings.iter().enumerate().take(PODIUM_POSITIONS) {
            let id = standing.competitor.id.as_str();
            if pos == 0 {
                *wins.entry(id).or_default() += 1;
            }
            *podiums.entry(id).or_default() += 1;
        }
    }

    let mut entries: Vec<LeaderboardEntry<'a>> = store
        .competitors()
        .iter()
        .map(|competitor| {
            let id = competitor.id.as_str();
            let (total_points, rounds_played) = rounds
                .get(id)
                .map(|r| {
                    let total = r.values().fold(0i64, |acc, &v| acc.saturating_add(v));
                    (total, r.len())
                })
                .unwrap_or((0, 0));

            LeaderboardEntry {
                competitor,
                total_points,
                rounds_played,
                average_points: if rounds_played > 0 {
                    total_points as f64 / rounds_played as f64
                } else {
                    0.0
                },
                wins: wins.get(id).copied().unwrap_or(0),
                top_three_finishes: podiums.get(id).copied().unwrap_or(0),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::round_results;
    use crate::testutil::LeagueBuilder;

    fn four_round_league() -> RecordStore {
        let mut b = LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .competitor("c", "C")
            .competitor("d", "D")
            .competitor("idle", "Idle");
        for r in ["r1", "r2", "r3", "r4"] {
            b = b
                .round(r, "")
                .submit("a", &format!("a-{r}"), r)
                .submit("b", &format!("b-{r}"), r)
                .submit("c", &format!("c-{r}"), r)
                .submit("d", &format!("d-{r}"), r);
        }
        // a wins r1..r3, b wins r4; d never scores in r4
        b.vote("b", "a-r1", "r1", 9)
            .vote("a", "b-r1", "r1", 5)
            .vote("a", "c-r1", "r1", 3)
            .vote("a", "d-r1", "r1", 1)
            .vote("b", "a-r2", "r2", 9)
            .vote("a", "c-r2", "r2", 5)
            .vote("a", "b-r2", "r2", 2)
            .vote("a", "d-r2", "r2", 1)
            .vote("c", "a-r3", "r3", 6)
            .vote("a", "d-r3", "r3", 4)
            .vote("a", "b-r3", "r3", 3)
            .vote("c", "b-r4", "r4", 8)
            .vote("b", "a-r4", "r4", 1)
            .vote("b", "c-r4", "r4", -2)
            .build()
    }

    #[test]
    fn test_totals_rounds_and_average() {
        let store = four_round_league();
        let index = JoinIndex::build(&store);
        let results = round_results(&store, &index);
        let board = leaderboard(&store, &index, &results);

        let a = board.iter().find(|e| e.competitor.id == "a").unwrap();
        assert_eq!(a.total_points, 25);
        assert_eq!(a.rounds_played, 4);
        assert!((a.average_points - 6.25).abs() < 1e-9);
        assert_eq!(a.wins, 3);
        assert_eq!(a.top_three_finishes, 4);

        let b = board.iter().find(|e| e.competitor.id == "b").unwrap();
        assert_eq!(b.total_points, 18);
        assert_eq!(b.wins, 1);
        assert_eq!(b.top_three_finishes, 4);

        let d = board.iter().find(|e| e.competitor.id == "d").unwrap();
        assert_eq!(d.rounds_played, 3);
        assert_eq!(d.top_three_finishes, 1);
    }

    #[test]
    fn test_sorted_desc_with_stable_ties() {
        let store = four_round_league();
        let index = JoinIndex::build(&store);
        let results = round_results(&store, &index);
        let board = leaderboard(&store, &index, &results);

        assert!(board.windows(2).all(|w| w[0].total_points >= w[1].total_points));
        assert_eq!(board[0].competitor.id, "a");
        // Idle has no activity: zero average, never a division fault
        let idle = board.last().unwrap();
        assert_eq!(idle.competitor.id, "idle");
        assert_eq!(idle.rounds_played, 0);
        assert_eq!(idle.average_points, 0.0);
    }

    #[test]
    fn test_replay_matches_total_points() {
        let store = four_round_league();
        let index = JoinIndex::build(&store);
        let results = round_results(&store, &index);
        let board = leaderboard(&store, &index, &results);
        let replay = points_by_round(&store, &index);

        for entry in &board {
            let replayed: i64 = replay
                .get(entry.competitor.id.as_str())
                .map(|r| r.values().sum())
                .unwrap_or(0);
            assert_eq!(replayed, entry.total_points);
        }
    }

    #[test]
    fn test_wins_match_round_winners() {
        let store = four_round_league();
        let index = JoinIndex::build(&store);
        let results = round_results(&store, &index);
        let board = leaderboard(&store, &index, &results);

        for entry in &board {
            let won = results
                .iter()
                .filter(|r| r.position_of(&entry.competitor.id) == Some(0))
                .count();
            let podium = results
                .iter()
                .filter(|r| matches!(r.position_of(&entry.competitor.id), Some(p) if p < 3))
                .count();
            assert_eq!(entry.wins, won);
            assert_eq!(entry.top_three_finishes, podium);
        }
    }

    #[test]
    fn test_equal_totals_keep_table_order() {
        let store = LeagueBuilder::new()
            .competitor("z", "Z")
            .competitor("y", "Y")
            .round("r1", "")
            .submit("y", "ty", "r1")
            .submit("z", "tz", "r1")
            .vote("q", "ty", "r1", 4)
            .vote("q", "tz", "r1", 4)
            .build();
        let index = JoinIndex::build(&store);
        let results = round_results(&store, &index);
        let board = leaderboard(&store, &index, &results);
        assert_eq!(board[0].competitor.id, "z");
        assert_eq!(board[1].competitor.id, "y");
    }
}

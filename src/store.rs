use std::collections::HashMap;

use crate::models::{Competitor, Round, Submission, UNKNOWN_COMPETITOR, Vote};

/// The frozen input snapshot for one computation pass.
///
/// Tables keep their original row order; every derived output that is
/// "in table order" refers to this order.
#[derive(Debug, Default)]
pub struct RecordStore {
    competitors: Vec<Competitor>,
    rounds: Vec<Round>,
    submissions: Vec<Submission>,
    votes: Vec<Vote>,
    /// Maps competitor id → index in `competitors`
    competitor_index: HashMap<String, usize>,
}

impl RecordStore {
    pub fn new(
        competitors: Vec<Competitor>,
        rounds: Vec<Round>,
        submissions: Vec<Submission>,
        votes: Vec<Vote>,
    ) -> Self {
        let mut competitor_index = HashMap::new();
        for (i, c) in competitors.iter().enumerate() {
            competitor_index.insert(c.id.clone(), i);
        }

        Self {
            competitors,
            rounds,
            submissions,
            votes,
            competitor_index,
        }
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    /// Look up a competitor by id. Ids absent from the table resolve to `None`
    /// and are excluded from every ranking.
    pub fn competitor(&self, id: &str) -> Option<&Competitor> {
        self.competitor_index.get(id).map(|&i| &self.competitors[i])
    }

    pub fn is_competitor(&self, id: &str) -> bool {
        self.competitor_index.contains_key(id)
    }

    /// Display name for an id, with a placeholder for unknown ids.
    pub fn display_name(&self, id: &str) -> &str {
        self.competitor(id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_COMPETITOR)
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::LeagueBuilder;

    #[test]
    fn test_competitor_lookup_and_placeholder() {
        let store = LeagueBuilder::new()
            .competitor("a", "Alice")
            .competitor("b", "Bob")
            .build();

        assert_eq!(store.competitor("b").map(|c| c.name.as_str()), Some("Bob"));
        assert!(store.competitor("zed").is_none());
        assert!(store.is_competitor("a"));
        assert_eq!(store.display_name("a"), "Alice");
        assert_eq!(store.display_name("zed"), "Unknown");
    }

    #[test]
    fn test_duplicate_competitor_id_resolves_to_last_row() {
        let store = LeagueBuilder::new()
            .competitor("a", "First")
            .competitor("a", "Second")
            .build();
        assert_eq!(store.display_name("a"), "Second");
        assert_eq!(store.competitors().len(), 2);
    }
}

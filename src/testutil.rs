//! Record fixtures for unit tests.

use crate::models::{Competitor, Round, Submission, Vote};
use crate::store::RecordStore;

#[derive(Default)]
pub struct LeagueBuilder {
    competitors: Vec<Competitor>,
    rounds: Vec<Round>,
    submissions: Vec<Submission>,
    votes: Vec<Vote>,
}

impl LeagueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn competitor(mut self, id: &str, name: &str) -> Self {
        self.competitors.push(Competitor {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    /// Round named after its id.
    pub fn round(mut self, id: &str, created: &str) -> Self {
        self.rounds.push(Round {
            id: id.into(),
            created: created.into(),
            name: id.into(),
            description: String::new(),
            playlist_url: String::new(),
        });
        self
    }

    pub fn submit(self, submitter: &str, uri: &str, round: &str) -> Self {
        self.submission(submitter, uri, round, "", "")
    }

    pub fn submit_by(self, submitter: &str, uri: &str, round: &str, artists: &str) -> Self {
        self.submission(submitter, uri, round, artists, "")
    }

    pub fn submit_at(self, submitter: &str, uri: &str, round: &str, created: &str) -> Self {
        self.submission(submitter, uri, round, "", created)
    }

    fn submission(
        mut self,
        submitter: &str,
        uri: &str,
        round: &str,
        artists: &str,
        created: &str,
    ) -> Self {
        self.submissions.push(Submission {
            spotify_uri: uri.into(),
            title: format!("Title of {uri}"),
            album: format!("Album of {uri}"),
            artists: artists.into(),
            submitter_id: submitter.into(),
            created: created.into(),
            comment: String::new(),
            round_id: round.into(),
            visible_to_voters: "Yes".into(),
        });
        self
    }

    pub fn vote(self, voter: &str, uri: &str, round: &str, points: i64) -> Self {
        self.full_vote(voter, uri, round, points, "", "")
    }

    pub fn vote_at(self, voter: &str, uri: &str, round: &str, points: i64, created: &str) -> Self {
        self.full_vote(voter, uri, round, points, created, "")
    }

    pub fn vote_with_comment(
        self,
        voter: &str,
        uri: &str,
        round: &str,
        points: i64,
        comment: &str,
    ) -> Self {
        self.full_vote(voter, uri, round, points, "", comment)
    }

    fn full_vote(
        mut self,
        voter: &str,
        uri: &str,
        round: &str,
        points: i64,
        created: &str,
        comment: &str,
    ) -> Self {
        self.votes.push(Vote {
            spotify_uri: uri.into(),
            voter_id: voter.into(),
            created: created.into(),
            points,
            comment: comment.into(),
            round_id: round.into(),
        });
        self
    }

    pub fn build(self) -> RecordStore {
        RecordStore::new(self.competitors, self.rounds, self.submissions, self.votes)
    }
}

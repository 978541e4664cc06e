use serde::Serialize;

/// Display name used for ids that have no row in the competitor table.
pub const UNKNOWN_COMPETITOR: &str = "Unknown";

/// A league participant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competitor {
    pub id: String,
    pub name: String,
}

/// A voting period. `created` drives chronological ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub created: String,
    pub name: String,
    pub description: String,
    pub playlist_url: String,
}

/// One track entered by one competitor into one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub spotify_uri: String,
    pub title: String,
    pub album: String,
    pub artists: String,
    pub submitter_id: String,
    pub created: String,
    pub comment: String,
    pub round_id: String,
    pub visible_to_voters: String,
}

impl Submission {
    pub fn key(&self) -> TrackKey<'_> {
        TrackKey::new(&self.spotify_uri, &self.round_id)
    }

    /// Individual artist credits: the `artists` column split on commas.
    pub fn credited_artists(&self) -> impl Iterator<Item = &str> {
        self.artists.split(',').map(str::trim)
    }
}

/// One point allocation toward one track entry. Negative points are downvotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub spotify_uri: String,
    pub voter_id: String,
    pub created: String,
    pub points: i64,
    pub comment: String,
    pub round_id: String,
}

impl Vote {
    pub fn key(&self) -> TrackKey<'_> {
        TrackKey::new(&self.spotify_uri, &self.round_id)
    }
}

/// Natural key of a track entry: the same track may recur across rounds
/// but identifies at most one entry within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackKey<'a> {
    pub spotify_uri: &'a str,
    pub round_id: &'a str,
}

impl<'a> TrackKey<'a> {
    pub fn new(spotify_uri: &'a str, round_id: &'a str) -> Self {
        Self { spotify_uri, round_id }
    }
}

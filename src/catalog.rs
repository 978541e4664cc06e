//! Music catalog analytics over submitted tracks.

use serde::Serialize;

use crate::genre::GenreClassifier;
use crate::index::JoinIndex;
use crate::models::Submission;
use crate::store::RecordStore;
use crate::tally::Tally;

const SPOTIFY_TRACK_PREFIX: &str = "spotify:track:";
/// Contributing artists listed per genre.
const GENRE_TOP_ARTISTS: usize = 5;
const NOT_AVAILABLE: &str = "N/A";

/// A track entry with its vote totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStats<'a> {
    #[serde(flatten)]
    pub submission: &'a Submission,
    pub points: i64,
    pub voter_count: usize,
    pub submitter_name: &'a str,
    pub embed_url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStats<'a> {
    pub name: &'a str,
    pub submission_count: usize,
    pub total_points: i64,
    pub submitters: Vec<&'a str>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumStats<'a> {
    pub name: &'a str,
    pub artist: &'a str,
    pub submission_count: usize,
    pub total_points: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreStats<'a> {
    pub genre: String,
    pub submission_count: usize,
    pub total_points: i64,
    pub top_artists: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_tracks: usize,
    pub unique_artists: usize,
    pub unique_albums: usize,
    pub unique_genres: usize,
    pub most_submitted_artist: String,
    pub most_submitted_album: String,
    pub top_genre: String,
}

/// Embeddable player URL for a track URI.
pub fn embed_url(spotify_uri: &str) -> String {
    let id = spotify_uri
        .strip_prefix(SPOTIFY_TRACK_PREFIX)
        .unwrap_or(spotify_uri);
    format!("https://open.spotify.com/embed/track/{id}?utm_source=generator&theme=0")
}

/// Every submission with its totals, in submission order.
pub fn all_tracks<'a>(store: &'a RecordStore, index: &JoinIndex<'a>) -> Vec<TrackStats<'a>> {
    store
        .submissions()
        .iter()
        .map(|sub| TrackStats {
            submission: sub,
            points: index.points_of(sub.key()),
            voter_count: index.voter_count_of(sub.key()),
            submitter_name: store.display_name(&sub.submitter_id),
            embed_url: embed_url(&sub.spotify_uri),
        })
        .collect()
}

/// Highest-scoring track entries, ties in submission order.
pub fn top_tracks<'a>(
    store: &'a RecordStore,
    index: &JoinIndex<'a>,
    limit: usize,
) -> Vec<TrackStats<'a>> {
    let mut tracks = all_tracks(store, index);
    tracks.sort_by(|a, b| b.points.cmp(&a.points));
    tracks.truncate(limit);
    tracks
}

/// Per credited artist, most-submitted first.
pub fn artist_stats<'a>(
    store: &'a RecordStore,
    index: &JoinIndex<'a>,
    classifier: &dyn GenreClassifier,
) -> Vec<ArtistStats<'a>> {
    let mut artists: Tally<&str, ArtistStats<'a>> = Tally::new();
    for sub in store.submissions() {
        let points = index.points_of(sub.key());
        let submitter = store.display_name(&sub.submitter_id);
        for name in sub.credited_artists() {
            let stats = artists.entry(name);
            if stats.submission_count == 0 {
                stats.name = name;
                stats.genres = classifier.classify(name);
            }
            stats.submission_count += 1;
            stats.total_points = stats.total_points.saturating_add(points);
            if !stats.submitters.contains(&submitter) {
                stats.submitters.push(submitter);
            }
        }
    }

    let mut out: Vec<ArtistStats<'a>> = artists.into_entries().into_iter().map(|(_, s)| s).collect();
    out.sort_by(|a, b| b.submission_count.cmp(&a.submission_count));
    out
}

/// Per (album, artists) credit, most-submitted first.
pub fn album_stats<'a>(store: &'a RecordStore, index: &JoinIndex<'a>) -> Vec<AlbumStats<'a>> {
    let mut albums: Tally<(&str, &str), (usize, i64)> = Tally::new();
    for sub in store.submissions() {
        let slot = albums.entry((sub.album.as_str(), sub.artists.as_str()));
        slot.0 += 1;
        slot.1 = slot.1.saturating_add(index.points_of(sub.key()));
    }

    let mut out: Vec<AlbumStats<'a>> = albums
        .into_entries()
        .into_iter()
        .map(|((name, artist), (submission_count, total_points))| AlbumStats {
            name,
            artist,
            submission_count,
            total_points,
        })
        .collect();
    out.sort_by(|a, b| b.submission_count.cmp(&a.submission_count));
    out
}

/// Per genre label, rolled up from (already sorted) artist stats.
pub fn genre_stats<'a>(artists: &[ArtistStats<'a>]) -> Vec<GenreStats<'a>> {
    let mut genres: Tally<&str, (usize, i64, Vec<&'a str>)> = Tally::new();
    for artist in artists {
        for genre in &artist.genres {
            let slot = genres.entry(genre.as_str());
            slot.0 += artist.submission_count;
            slot.1 = slot.1.saturating_add(artist.total_points);
            if slot.2.len() < GENRE_TOP_ARTISTS {
                slot.2.push(artist.name);
            }
        }
    }

    let mut out: Vec<GenreStats<'a>> = genres
        .into_entries()
        .into_iter()
        .map(|(genre, (submission_count, total_points, top_artists))| GenreStats {
            genre: genre.to_string(),
            submission_count,
            total_points,
            top_artists,
        })
        .collect();
    out.sort_by(|a, b| b.submission_count.cmp(&a.submission_count));
    out
}

pub fn catalog_summary(
    store: &RecordStore,
    artists: &[ArtistStats<'_>],
    albums: &[AlbumStats<'_>],
    genres: &[GenreStats<'_>],
) -> CatalogSummary {
    let or_na = |s: Option<&str>| s.unwrap_or(NOT_AVAILABLE).to_string();
    CatalogSummary {
        total_tracks: store.submissions().len(),
        unique_artists: artists.len(),
        unique_albums: albums.len(),
        unique_genres: genres.len(),
        most_submitted_artist: or_na(artists.first().map(|a| a.name)),
        most_submitted_album: or_na(albums.first().map(|a| a.name)),
        top_genre: or_na(genres.first().map(|g| g.genre.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::GenreRegistry;
    use crate::testutil::LeagueBuilder;

    fn league() -> RecordStore {
        LeagueBuilder::new()
            .competitor("a", "Alice")
            .competitor("b", "Bob")
            .round("r1", "")
            .round("r2", "")
            .submit_by("a", "spotify:track:AAA", "r1", "Bon Iver, Qqxz Unknown")
            .submit_by("b", "spotify:track:BBB", "r1", "Bon Iver")
            .submit_by("ghost", "spotify:track:AAA", "r2", "Daft Punk")
            .vote("b", "spotify:track:AAA", "r1", 3)
            .vote("a", "spotify:track:BBB", "r1", 6)
            .vote("a", "spotify:track:AAA", "r2", 2)
            .vote("b", "spotify:track:AAA", "r2", 2)
            .build()
    }

    #[test]
    fn test_embed_url_strips_prefix() {
        assert_eq!(
            embed_url("spotify:track:4uLU6hMCjMI75M1A2tKUQC"),
            "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC?utm_source=generator&theme=0"
        );
        assert_eq!(
            embed_url("plain"),
            "https://open.spotify.com/embed/track/plain?utm_source=generator&theme=0"
        );
    }

    #[test]
    fn test_tracks_carry_totals_and_names() {
        let store = league();
        let index = JoinIndex::build(&store);
        let tracks = all_tracks(&store, &index);

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].points, 3);
        assert_eq!(tracks[2].points, 4);
        assert_eq!(tracks[2].voter_count, 2);
        assert_eq!(tracks[2].submitter_name, "Unknown");

        let top = top_tracks(&store, &index, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].submission.spotify_uri, "spotify:track:BBB");
        assert_eq!(top[1].submission.round_id, "r2");
    }

    #[test]
    fn test_artist_album_and_genre_rollups() {
        let store = league();
        let index = JoinIndex::build(&store);
        let registry = GenreRegistry::default();
        let artists = artist_stats(&store, &index, &registry);

        let names: Vec<&str> = artists.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Bon Iver", "Qqxz Unknown", "Daft Punk"]);
        assert_eq!(artists[0].submission_count, 2);
        assert_eq!(artists[0].total_points, 9);
        assert_eq!(artists[0].submitters, vec!["Alice", "Bob"]);
        assert_eq!(artists[1].genres, vec!["Other"]);

        let albums = album_stats(&store, &index);
        assert_eq!(albums.len(), 3);

        let genres = genre_stats(&artists);
        assert_eq!(genres[0].genre, "Indie Folk");
        assert_eq!(genres[0].submission_count, 2);
        assert_eq!(genres[0].top_artists, vec!["Bon Iver"]);

        let summary = catalog_summary(&store, &artists, &albums, &genres);
        assert_eq!(summary.total_tracks, 3);
        assert_eq!(summary.unique_artists, 3);
        assert_eq!(summary.most_submitted_artist, "Bon Iver");
        assert_eq!(summary.top_genre, "Indie Folk");
    }

    #[test]
    fn test_empty_catalog_summary_uses_placeholder() {
        let store = LeagueBuilder::new().build();
        let summary = catalog_summary(&store, &[], &[], &[]);
        assert_eq!(summary.total_tracks, 0);
        assert_eq!(summary.most_submitted_artist, "N/A");
        assert_eq!(summary.most_submitted_album, "N/A");
        assert_eq!(summary.top_genre, "N/A");
    }
}

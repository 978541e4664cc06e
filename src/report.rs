//! One full engine pass over a record store.

use serde::Serialize;

use crate::awards::{Award, AwardContext, calculate_awards};
use crate::catalog::{
    AlbumStats, ArtistStats, CatalogSummary, GenreStats, TrackStats, album_stats, artist_stats,
    catalog_summary, genre_stats, top_tracks,
};
use crate::config::EngineOptions;
use crate::genre::GenreClassifier;
use crate::index::JoinIndex;
use crate::leaderboard::{LeaderboardEntry, leaderboard};
use crate::standings::{RoundResult, round_results};
use crate::store::RecordStore;
use crate::summary::{LeagueSummary, league_summary};
use crate::taste::{TasteProfile, taste_profiles};

/// Track entries included in a full report.
pub const REPORT_TOP_TRACKS: usize = 20;

/// Every output table, borrowing from the store it was computed over.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueReport<'a> {
    pub summary: LeagueSummary,
    pub round_results: Vec<RoundResult<'a>>,
    pub leaderboard: Vec<LeaderboardEntry<'a>>,
    pub awards: Vec<Award<'a>>,
    pub taste_profiles: Vec<TasteProfile<'a>>,
    pub top_tracks: Vec<TrackStats<'a>>,
    pub artists: Vec<ArtistStats<'a>>,
    pub albums: Vec<AlbumStats<'a>>,
    pub genres: Vec<GenreStats<'a>>,
    pub catalog: CatalogSummary,
}

impl<'a> LeagueReport<'a> {
    /// Compute everything from scratch. Pure: same store, same report.
    pub fn build(
        store: &'a RecordStore,
        classifier: &dyn GenreClassifier,
        options: &EngineOptions,
    ) -> Self {
        let index = JoinIndex::build(store);
        let round_results = round_results(store, &index);
        let leaderboard = leaderboard(store, &index, &round_results);

        let awards = calculate_awards(&AwardContext {
            store,
            index: &index,
            results: &round_results,
            options,
        });

        let artists = artist_stats(store, &index, classifier);
        let albums = album_stats(store, &index);
        let genres = genre_stats(&artists);
        let catalog = catalog_summary(store, &artists, &albums, &genres);

        Self {
            summary: league_summary(store),
            leaderboard,
            awards,
            taste_profiles: taste_profiles(store, &index, classifier),
            top_tracks: top_tracks(store, &index, REPORT_TOP_TRACKS),
            round_results,
            artists,
            albums,
            genres,
            catalog,
        }
    }
}

//! Per-competitor taste profiles.
//!
//! Submission and voting genre histograms come from the [`GenreClassifier`];
//! archetypes are then handed out greedily, see [`archetypes`].

pub mod archetypes;

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::genre::GenreClassifier;
use crate::index::JoinIndex;
use crate::store::RecordStore;
use crate::tally::Tally;

use archetypes::{Candidate, FALLBACK_ARCHETYPE, assign_archetypes};

/// Genres kept in a profile's breakdown (and used for archetype scoring).
const BREAKDOWN_LEN: usize = 6;
const TOP_GENRES_LEN: usize = 3;
const VOTING_PREFERENCE_LEN: usize = 5;
const TOP_ARTISTS_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreShare {
    pub genre: String,
    pub count: usize,
    /// Share of all genre tags on the competitor's submissions, rounded.
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenrePoints {
    pub genre: String,
    pub points_given: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasteProfile<'a> {
    pub competitor_id: &'a str,
    pub competitor_name: &'a str,
    pub unique_artists: usize,
    pub top_artists: Vec<&'a str>,
    pub submission_count: usize,
    pub genre_breakdown: Vec<GenreShare>,
    pub top_genres: Vec<String>,
    pub voting_genre_preference: Vec<GenrePoints>,
    pub personality_name: &'static str,
    pub personality_emoji: &'static str,
}

/// Raw per-id histograms before ranking.
#[derive(Debug, Default)]
struct Histograms<'a> {
    /// Credited artists in first-seen order (value unused)
    artists: Tally<&'a str, ()>,
    genres: Tally<String, usize>,
    submissions: usize,
    voting: Tally<String, i64>,
}

fn collect_histograms<'a>(
    store: &'a RecordStore,
    index: &JoinIndex<'a>,
    classifier: &dyn GenreClassifier,
) -> Tally<&'a str, Histograms<'a>> {
    let mut by_id: Tally<&str, Histograms<'a>> = Tally::new();

    for sub in store.submissions() {
        let h = by_id.entry(sub.submitter_id.as_str());
        h.submissions += 1;
        for artist in sub.credited_artists() {
            h.artists.entry(artist);
            for genre in classifier.classify(artist) {
                h.genres.add(genre, 1);
            }
        }
    }

    for vote in store.votes().iter().filter(|v| v.points > 0) {
        let Some(sub) = index.submission_of(vote.key()) else {
            continue;
        };
        let h = by_id.entry(vote.voter_id.as_str());
        for artist in sub.credited_artists() {
            for genre in classifier.classify(artist) {
                h.voting.add(genre, vote.points);
            }
        }
    }

    by_id
}

/// Entries sorted by value descending, ties in first-seen order.
fn ranked<V: Copy + PartialOrd>(tally: &Tally<String, V>) -> Vec<(&str, V)> {
    let mut entries: Vec<(&str, V)> = tally.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries
}

fn genre_breakdown(h: Option<&Histograms<'_>>) -> Vec<GenreShare> {
    let Some(h) = h else {
        return Vec::new();
    };
    let total: usize = h.genres.values().sum();
    ranked(&h.genres)
        .into_iter()
        .take(BREAKDOWN_LEN)
        .map(|(genre, count)| GenreShare {
            genre: genre.to_string(),
            count,
            percentage: if total > 0 {
                (count as f64 / total as f64 * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}

/// Build one profile per competitor, with unique archetypes.
///
/// Output starts in competitor-table order and is then stably sorted by
/// submission count, descending.
pub fn taste_profiles<'a>(
    store: &'a RecordStore,
    index: &JoinIndex<'a>,
    classifier: &dyn GenreClassifier,
) -> Vec<TasteProfile<'a>> {
    let histograms = collect_histograms(store, index, classifier);

    let breakdowns: Vec<Vec<GenreShare>> = store
        .competitors()
        .iter()
        .map(|c| genre_breakdown(histograms.get(c.id.as_str())))
        .collect();

    let candidates: Vec<Candidate<'_>> = store
        .competitors()
        .iter()
        .zip(&breakdowns)
        .map(|(c, breakdown)| Candidate {
            id: c.id.as_str(),
            histogram: breakdown.iter().map(|g| (g.genre.as_str(), g.count)).collect(),
        })
        .collect();
    let mut claimed = HashSet::new();
    let assignments = assign_archetypes(&candidates, &mut claimed);

    let mut profiles: Vec<TasteProfile<'a>> = store
        .competitors()
        .iter()
        .zip(breakdowns.iter())
        .map(|(c, breakdown)| {
            let h = histograms.get(c.id.as_str());
            let artists: Vec<&'a str> = h
                .map(|h| h.artists.iter().map(|(a, _)| *a).collect())
                .unwrap_or_default();
            let voting_genre_preference = h
                .map(|h| {
                    ranked(&h.voting)
                        .into_iter()
                        .take(VOTING_PREFERENCE_LEN)
                        .map(|(genre, points_given)| GenrePoints {
                            genre: genre.to_string(),
                            points_given,
                        })
                        .collect()
                })
                .unwrap_or_default();
            let archetype = assignments
                .get(c.id.as_str())
                .copied()
                .unwrap_or(&FALLBACK_ARCHETYPE);

            TasteProfile {
                competitor_id: c.id.as_str(),
                competitor_name: c.name.as_str(),
                unique_artists: artists.len(),
                top_artists: artists.iter().take(TOP_ARTISTS_LEN).copied().collect(),
                submission_count: h.map(|h| h.submissions).unwrap_or(0),
                top_genres: breakdown
                    .iter()
                    .take(TOP_GENRES_LEN)
                    .map(|g| g.genre.clone())
                    .collect(),
                genre_breakdown: breakdown.clone(),
                voting_genre_preference,
                personality_name: archetype.name,
                personality_emoji: archetype.emoji,
            }
        })
        .collect();

    profiles.sort_by(|a, b| b.submission_count.cmp(&a.submission_count));
    log::debug!(
        "Built {} taste profiles, {} archetypes claimed",
        profiles.len(),
        claimed.len()
    );
    profiles
}

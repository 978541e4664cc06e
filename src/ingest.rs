//! Tabular-text ingestion for the four league tables.
//!
//! Quoted fields may contain commas and newlines; `""` inside quotes is a
//! literal quote. The first row of every table is a header and is discarded.
//! Missing trailing columns become empty strings.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::lenient::parse_points;
use crate::models::{Competitor, Round, Submission, Vote};
use crate::store::RecordStore;

pub const COMPETITORS_FILE: &str = "competitors.csv";
pub const ROUNDS_FILE: &str = "rounds.csv";
pub const SUBMISSIONS_FILE: &str = "submissions.csv";
pub const VOTES_FILE: &str = "votes.csv";

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing table: {0}")]
    MissingTable(PathBuf),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Load all four tables from `dir` into a record store.
pub fn load_dir(dir: &Path) -> Result<RecordStore> {
    let competitors = parse_competitors(&read_table(&dir.join(COMPETITORS_FILE))?);
    let rounds = parse_rounds(&read_table(&dir.join(ROUNDS_FILE))?);
    let submissions = parse_submissions(&read_table(&dir.join(SUBMISSIONS_FILE))?);
    let votes = parse_votes(&read_table(&dir.join(VOTES_FILE))?);

    log::info!(
        "Loaded {} competitors, {} rounds, {} submissions, {} votes from {}",
        competitors.len(),
        rounds.len(),
        submissions.len(),
        votes.len(),
        dir.display()
    );

    Ok(RecordStore::new(competitors, rounds, submissions, votes))
}

fn read_table(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(IngestError::MissingTable(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Split text into records of fields.
///
/// Physical lines are joined until the accumulated record holds an even
/// number of quote characters. Blank records are skipped.
pub fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut pending = String::new();
    let mut quotes = 0usize;

    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !pending.is_empty() || quotes > 0 {
            pending.push('\n');
        }
        pending.push_str(line);
        quotes += line.matches('"').count();

        if quotes % 2 == 0 {
            if !pending.trim().is_empty() {
                records.push(split_fields(&pending));
            }
            pending.clear();
            quotes = 0;
        }
    }

    // Unterminated quote at end of input: keep what we have
    if !pending.trim().is_empty() {
        records.push(split_fields(&pending));
    }

    records
}

/// Split a single logical record on unquoted commas.
fn split_fields(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Column `i` of a record, or empty when the record is short.
fn col(record: &[String], i: usize) -> String {
    record.get(i).cloned().unwrap_or_default()
}

fn data_rows(text: &str) -> impl Iterator<Item = Vec<String>> {
    parse_records(text).into_iter().skip(1)
}

pub fn parse_competitors(text: &str) -> Vec<Competitor> {
    data_rows(text)
        .map(|r| Competitor {
            id: col(&r, 0),
            name: col(&r, 1),
        })
        .collect()
}

pub fn parse_rounds(text: &str) -> Vec<Round> {
    data_rows(text)
        .map(|r| Round {
            id: col(&r, 0),
            created: col(&r, 1),
            name: col(&r, 2).trim().to_string(),
            description: col(&r, 3),
            playlist_url: col(&r, 4),
        })
        .collect()
}

pub fn parse_submissions(text: &str) -> Vec<Submission> {
    data_rows(text)
        .map(|r| Submission {
            spotify_uri: col(&r, 0),
            title: col(&r, 1),
            album: col(&r, 2),
            artists: col(&r, 3),
            submitter_id: col(&r, 4),
            created: col(&r, 5),
            comment: col(&r, 6),
            round_id: col(&r, 7),
            visible_to_voters: col(&r, 8),
        })
        .collect()
}

pub fn parse_votes(text: &str) -> Vec<Vote> {
    data_rows(text)
        .map(|r| Vote {
            spotify_uri: col(&r, 0),
            voter_id: col(&r, 1),
            created: col(&r, 2),
            points: parse_points(&col(&r, 3)),
            comment: col(&r, 4),
            round_id: col(&r, 5),
        })
        .collect()
}

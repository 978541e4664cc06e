pub mod awards;
pub mod catalog;
pub mod config;
pub mod genre;
pub mod index;
pub mod ingest;
pub mod leaderboard;
pub mod lenient;
pub mod models;
pub mod report;
pub mod standings;
pub mod store;
pub mod summary;
pub mod tally;
pub mod taste;

#[cfg(test)]
mod testutil;

/// Application name for XDG paths
pub const APP_NAME: &str = "musicleague";

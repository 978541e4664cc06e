use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use musicleague::awards::{Award, AwardContext, calculate_awards};
use musicleague::catalog;
use musicleague::genre::{GenreClassifier, GenreRegistry};
use musicleague::index::JoinIndex;
use musicleague::report::LeagueReport;
use musicleague::standings::RoundResult;
use musicleague::store::RecordStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "musicleague", version, about = "Music League stats and awards engine")]
struct Cli {
    /// Directory holding the league CSV exports
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum ReportFormat {
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-round standings
    Standings {
        /// Only rounds whose name contains this text (case-insensitive)
        #[arg(short, long)]
        round: Option<String>,
    },

    /// Show the overall leaderboard
    Leaderboard,

    /// Show award winners
    Awards {
        /// Show the full rankings of a single award (e.g. "night-owl")
        #[arg(short, long)]
        award: Option<String>,

        /// Show full rankings for every award
        #[arg(long)]
        full: bool,
    },

    /// Show each competitor's taste profile and archetype
    Profiles,

    /// Show the highest-scoring track entries
    Tracks {
        /// Number of results
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show the most-submitted artists
    Artists {
        /// Number of results
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show the most-submitted genres
    Genres {
        /// Number of results
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show league and catalog statistics
    Stats,

    /// Print the genres an artist credit classifies as
    Classify {
        /// Artist credit, e.g. "Daft Punk, Pharrell Williams"
        artist: String,
    },

    /// Dump every output table
    Report {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load config file (optional, defaults if missing)
    let config = musicleague::config::AppConfig::load();
    let registry = GenreRegistry::new(&config.custom_artists);
    let options = config.engine_options();

    // Classification needs no league data
    if let Commands::Classify { artist } = &cli.command {
        println!("{}", registry.classify(artist).join(", "));
        return Ok(());
    }

    // Resolve data directory: CLI > config > XDG default
    let data_dir = config.resolve_data_dir(cli.data_dir);
    log::info!("Data directory: {}", data_dir.display());

    let store = musicleague::ingest::load_dir(&data_dir)
        .with_context(|| format!("Failed to load league data from {}", data_dir.display()))?;
    let index = JoinIndex::build(&store);

    match cli.command {
        Commands::Standings { round } => {
            let results = musicleague::standings::round_results(&store, &index);
            let selected: Vec<&RoundResult> = match &round {
                Some(pattern) => {
                    let pattern = pattern.to_lowercase();
                    results
                        .iter()
                        .filter(|r| r.round.name.to_lowercase().contains(&pattern))
                        .collect()
                }
                None => results.iter().collect(),
            };

            if selected.is_empty() {
                match round {
                    Some(pattern) => anyhow::bail!("No round matching \"{}\".", pattern),
                    None => println!("No rounds found."),
                }
                return Ok(());
            }

            for result in selected {
                print_round(result);
                println!();
            }
        }

        Commands::Leaderboard => {
            let results = musicleague::standings::round_results(&store, &index);
            let board = musicleague::leaderboard::leaderboard(&store, &index, &results);

            if board.is_empty() {
                println!("No competitors found.");
                return Ok(());
            }

            println!(
                "{:>3}  {:<25} {:>6} {:>6} {:>7} {:>4} {:>5}",
                "#", "Competitor", "Points", "Rounds", "Avg", "Wins", "Top3"
            );
            println!("{}", "-".repeat(64));
            for (i, entry) in board.iter().enumerate() {
                println!(
                    "{:>3}  {:<25} {:>6} {:>6} {:>7.2} {:>4} {:>5}",
                    i + 1,
                    truncate(&entry.competitor.name, 25),
                    entry.total_points,
                    entry.rounds_played,
                    entry.average_points,
                    entry.wins,
                    entry.top_three_finishes,
                );
            }
        }

        Commands::Awards { award, full } => {
            let results = musicleague::standings::round_results(&store, &index);
            let awards = calculate_awards(&AwardContext {
                store: &store,
                index: &index,
                results: &results,
                options: &options,
            });

            match award {
                Some(id) => {
                    let Some(found) = awards.iter().find(|a| a.id == id) else {
                        let known: Vec<&str> = awards.iter().map(|a| a.id).collect();
                        anyhow::bail!("Unknown award \"{}\". Known awards: {}", id, known.join(", "));
                    };
                    print_award_headline(found);
                    print_award_rankings(found);
                }
                None => {
                    for a in &awards {
                        print_award_headline(a);
                        if full {
                            print_award_rankings(a);
                            println!();
                        }
                    }
                }
            }
        }

        Commands::Profiles => {
            let profiles = musicleague::taste::taste_profiles(&store, &index, &registry);

            if profiles.is_empty() {
                println!("No competitors found.");
                return Ok(());
            }

            for p in &profiles {
                println!(
                    "{} {} ({})",
                    p.personality_emoji, p.competitor_name, p.personality_name
                );
                println!(
                    "  {} submissions, {} unique artists",
                    p.submission_count, p.unique_artists
                );
                if !p.genre_breakdown.is_empty() {
                    let genres: Vec<String> = p
                        .genre_breakdown
                        .iter()
                        .map(|g| format!("{} {}%", g.genre, g.percentage))
                        .collect();
                    println!("  Genres:      {}", genres.join(", "));
                }
                if !p.top_artists.is_empty() {
                    println!("  Top artists: {}", p.top_artists.join(", "));
                }
                if !p.voting_genre_preference.is_empty() {
                    let voting: Vec<String> = p
                        .voting_genre_preference
                        .iter()
                        .map(|g| format!("{} ({})", g.genre, g.points_given))
                        .collect();
                    println!("  Votes for:   {}", voting.join(", "));
                }
                println!();
            }
        }

        Commands::Tracks { limit } => {
            let tracks = catalog::top_tracks(&store, &index, limit);

            if tracks.is_empty() {
                println!("No submissions found.");
                return Ok(());
            }

            println!(
                "{:<30} {:<25} {:<20} {:>6} {:>6}",
                "Title", "Artists", "Submitter", "Points", "Voters"
            );
            println!("{}", "-".repeat(91));
            for t in &tracks {
                println!(
                    "{:<30} {:<25} {:<20} {:>6} {:>6}",
                    truncate(&t.submission.title, 30),
                    truncate(&t.submission.artists, 25),
                    truncate(t.submitter_name, 20),
                    t.points,
                    t.voter_count,
                );
            }
        }

        Commands::Artists { limit } => {
            let artists = catalog::artist_stats(&store, &index, &registry);

            if artists.is_empty() {
                println!("No artists found.");
                return Ok(());
            }

            println!(
                "{:<30} {:>5} {:>6}  {}",
                "Artist", "Subs", "Points", "Genres"
            );
            println!("{}", "-".repeat(80));
            for a in artists.iter().take(limit) {
                println!(
                    "{:<30} {:>5} {:>6}  {}",
                    truncate(a.name, 30),
                    a.submission_count,
                    a.total_points,
                    a.genres.join(", "),
                );
            }
        }

        Commands::Genres { limit } => {
            let artists = catalog::artist_stats(&store, &index, &registry);
            let genres = catalog::genre_stats(&artists);

            if genres.is_empty() {
                println!("No genres found.");
                return Ok(());
            }

            println!(
                "{:<25} {:>5} {:>6}  {}",
                "Genre", "Subs", "Points", "Top artists"
            );
            println!("{}", "-".repeat(80));
            for g in genres.iter().take(limit) {
                println!(
                    "{:<25} {:>5} {:>6}  {}",
                    truncate(&g.genre, 25),
                    g.submission_count,
                    g.total_points,
                    g.top_artists.join(", "),
                );
            }
        }

        Commands::Stats => {
            let league = musicleague::summary::league_summary(&store);
            let artists = catalog::artist_stats(&store, &index, &registry);
            let albums = catalog::album_stats(&store, &index);
            let genres = catalog::genre_stats(&artists);
            let summary = catalog::catalog_summary(&store, &artists, &albums, &genres);

            println!("League Statistics");
            println!("=================");
            println!("Competitors:      {}", league.competitors);
            println!("Rounds:           {}", league.rounds);
            println!("Submissions:      {}", league.submissions);
            println!("Votes:            {}", league.votes);
            println!("Points awarded:   {}", league.total_points);
            println!();
            println!("Catalog");
            println!("=======");
            println!("Unique artists:   {}", summary.unique_artists);
            println!("Unique albums:    {}", summary.unique_albums);
            println!("Unique genres:    {}", summary.unique_genres);
            println!("Top artist:       {}", summary.most_submitted_artist);
            println!("Top album:        {}", summary.most_submitted_album);
            println!("Top genre:        {}", summary.top_genre);
        }

        Commands::Report { format } => {
            print_report(&store, &registry, &options, &format)?;
        }

        // Handled before loading data
        Commands::Classify { .. } => {}
    }

    Ok(())
}

fn print_report(
    store: &RecordStore,
    registry: &GenreRegistry,
    options: &musicleague::config::EngineOptions,
    format: &ReportFormat,
) -> Result<()> {
    let report = LeagueReport::build(store, registry, options);
    let text = match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        }
        ReportFormat::Yaml => {
            serde_yaml::to_string(&report).context("Failed to serialize report")?
        }
    };
    println!("{}", text);
    Ok(())
}

/// Print one round's standings table.
fn print_round(result: &RoundResult) {
    println!("Round: {}", result.round.name);
    if result.standings.is_empty() {
        println!("  (no votes)");
        return;
    }

    println!("{:>3}  {:<25} {:>6}  {}", "#", "Competitor", "Points", "Track");
    println!("{}", "-".repeat(75));
    for (i, s) in result.standings.iter().enumerate() {
        let track = s
            .submission
            .map(|sub| truncate(&sub.title, 35))
            .unwrap_or_default();
        println!(
            "{:>3}  {:<25} {:>6}  {}",
            i + 1,
            truncate(&s.competitor.name, 25),
            s.points,
            track,
        );
    }
}

fn print_award_headline(award: &Award) {
    let winner = match (award.winner, award.winner_secondary) {
        (Some(a), Some(b)) => format!("{} & {}", a.name, b.name),
        (Some(a), None) => a.name.clone(),
        _ => "-".to_string(),
    };
    println!(
        "{} {:<20} {:<30} {}",
        award.icon, award.name, truncate(&winner, 30), award.value
    );
}

/// Print an award's full rankings.
fn print_award_rankings(award: &Award) {
    println!("    {}", award.description);
    println!("    {:>3}  {:<25} {}", "#", "Competitor", award.metric_label);
    println!("    {}", "-".repeat(50));
    for (i, r) in award.rankings.iter().enumerate() {
        println!(
            "    {:>3}  {:<25} {}",
            i + 1,
            truncate(&r.competitor.name, 25),
            r.formatted_value
        );
    }
}

/// Shorten to `max` characters, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

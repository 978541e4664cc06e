//! Rules over submission and vote timestamps. Unparseable times are skipped.

use chrono::{DateTime, Timelike, Utc};

use crate::awards::rankings::{create_rankings, format_number};
use crate::awards::{Award, AwardContext, AwardDef, SortOrder, headline};
use crate::lenient::{parse_local_timestamp, parse_timestamp};
use crate::models::{Submission, Vote};
use crate::tally::Tally;

/// Local hours in `[LATE_NIGHT_START, 24) ∪ [0, LATE_NIGHT_END)` count as night.
const LATE_NIGHT_START: u32 = 22;
const LATE_NIGHT_END: u32 = 4;

const NIGHT_OWL: AwardDef = AwardDef {
    id: "night-owl",
    name: "The Night Owl",
    description: "Submits songs between 10pm and 4am",
    icon: "moon",
    metric_label: "Late Subs",
    sort_order: SortOrder::Desc,
};

const DUNCE: AwardDef = AwardDef {
    id: "dunce",
    name: "The Dunce",
    description: "Consistently submits or votes last in rounds",
    icon: "alarm-clock-off",
    metric_label: "Times Last",
    sort_order: SortOrder::Desc,
};

const EAGER_BEAVER: AwardDef = AwardDef {
    id: "eager-beaver",
    name: "The Eager Beaver",
    description: "Consistently submits or votes first in rounds",
    icon: "zap",
    metric_label: "Times First",
    sort_order: SortOrder::Desc,
};

pub(super) fn night_owl<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let mut late: Tally<&str, i64> = ctx.seeded();
    for sub in ctx.store.submissions() {
        let Some(created) = parse_local_timestamp(&sub.created, ctx.options.utc_offset) else {
            continue;
        };
        let hour = created.hour();
        if hour >= LATE_NIGHT_START || hour < LATE_NIGHT_END {
            late.add(sub.submitter_id.as_str(), 1);
        }
    }

    let rankings = create_rankings(
        ctx.store,
        late.iter().map(|(id, v)| (*id, *v as f64)),
        NIGHT_OWL.sort_order,
        |v| format!("{} subs", format_number(v)),
    );
    let value = headline(
        &rankings,
        |v| format!("{} late-night submissions", format_number(v)),
        "0",
    );
    NIGHT_OWL.ranked(rankings, value)
}

/// Which end of a round the timing rules look at.
#[derive(Clone, Copy)]
enum Extreme {
    Latest,
    Earliest,
}

impl Extreme {
    /// Strict comparison: on equal times the earlier record keeps the spot.
    fn beats(self, candidate: DateTime<Utc>, current: DateTime<Utc>) -> bool {
        match self {
            Extreme::Latest => candidate > current,
            Extreme::Earliest => candidate < current,
        }
    }
}

/// Per competitor: rounds where they made the extreme submission, plus
/// rounds where they cast the extreme vote.
fn extreme_counts<'a>(ctx: &AwardContext<'a, '_>, extreme: Extreme) -> Tally<&'a str, i64> {
    let mut subs_by_round: Tally<&str, Vec<&Submission>> = Tally::new();
    for sub in ctx.store.submissions() {
        subs_by_round.entry(sub.round_id.as_str()).push(sub);
    }
    let mut votes_by_round: Tally<&str, Vec<&Vote>> = Tally::new();
    for vote in ctx.store.votes() {
        votes_by_round.entry(vote.round_id.as_str()).push(vote);
    }

    let mut totals: Tally<&str, i64> = ctx.seeded();

    for (_, subs) in subs_by_round.iter() {
        let mut pick: Option<(&str, DateTime<Utc>)> = None;
        for sub in subs {
            let Some(t) = parse_timestamp(&sub.created) else {
                continue;
            };
            match pick {
                Some((_, current)) if !extreme.beats(t, current) => {}
                _ => pick = Some((sub.submitter_id.as_str(), t)),
            }
        }
        if let Some((submitter, _)) = pick {
            totals.add(submitter, 1);
        }
    }

    for (_, votes) in votes_by_round.iter() {
        // Each voter's own extreme vote time within the round
        let mut by_voter: Tally<&str, Option<DateTime<Utc>>> = Tally::new();
        for vote in votes {
            let Some(t) = parse_timestamp(&vote.created) else {
                continue;
            };
            let slot = by_voter.entry(vote.voter_id.as_str());
            match *slot {
                Some(current) if !extreme.beats(t, current) => {}
                _ => *slot = Some(t),
            }
        }

        let mut pick: Option<(&str, DateTime<Utc>)> = None;
        for (&voter, time) in by_voter.iter() {
            let Some(t) = *time else { continue };
            match pick {
                Some((_, current)) if !extreme.beats(t, current) => {}
                _ => pick = Some((voter, t)),
            }
        }
        if let Some((voter, _)) = pick {
            totals.add(voter, 1);
        }
    }

    totals
}

pub(super) fn dunce<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let totals = extreme_counts(ctx, Extreme::Latest);
    let rankings = create_rankings(
        ctx.store,
        totals.iter().map(|(id, v)| (*id, *v as f64)),
        DUNCE.sort_order,
        |v| format!("{}× last", format_number(v)),
    );
    let value = headline(
        &rankings,
        |v| format!("{} times last", format_number(v)),
        "0",
    );
    DUNCE.ranked(rankings, value)
}

pub(super) fn eager_beaver<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let totals = extreme_counts(ctx, Extreme::Earliest);
    let rankings = create_rankings(
        ctx.store,
        totals.iter().map(|(id, v)| (*id, *v as f64)),
        EAGER_BEAVER.sort_order,
        |v| format!("{}× first", format_number(v)),
    );
    let value = headline(
        &rankings,
        |v| format!("{} times first", format_number(v)),
        "0",
    );
    EAGER_BEAVER.ranked(rankings, value)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use crate::awards::test_support::*;
    use crate::config::EngineOptions;
    use crate::store::RecordStore;
    use crate::testutil::LeagueBuilder;

    fn night_league() -> RecordStore {
        LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .round("r1", "")
            .submit_at("a", "t1", "r1", "2024-03-01T23:15:00Z")
            .submit_at("a", "t2", "r1", "2024-03-02T03:59:59Z")
            .submit_at("b", "t3", "r1", "2024-03-02T04:00:00Z")
            .submit_at("b", "t4", "r1", "2024-03-02T21:59:00Z")
            .submit_at("b", "t5", "r1", "not a date")
            .build()
    }

    #[test]
    fn test_night_owl_counts_late_hours() {
        let store = night_league();
        with_awards(&store, |awards| {
            let award = find(awards, "night-owl");
            assert_eq!(ranking_ids(award), vec!["a", "b"]);
            assert_eq!(award.rankings[0].value, 2.0);
            assert_eq!(award.rankings[1].value, 0.0);
            assert_eq!(award.rankings[0].formatted_value, "2 subs");
            assert_eq!(award.value.to_string(), "2 late-night submissions");
        });
    }

    #[test]
    fn test_night_owl_uses_league_offset() {
        let store = night_league();
        // UTC+1: 21:59Z becomes 22:59 local, 03:59:59Z becomes 04:59 local
        let options = EngineOptions {
            utc_offset: FixedOffset::east_opt(3600).unwrap(),
        };
        with_options(&store, &options, |awards| {
            let award = find(awards, "night-owl");
            let b = award.rankings.iter().find(|r| r.competitor.id == "b").unwrap();
            let a = award.rankings.iter().find(|r| r.competitor.id == "a").unwrap();
            assert_eq!(b.value, 1.0);
            assert_eq!(a.value, 1.0);
        });
    }

    #[test]
    fn test_night_owl_reads_naive_times_as_local() {
        let store = LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .round("r1", "")
            .submit_at("a", "t1", "r1", "2024-03-01 23:00:00")
            .submit_at("b", "t2", "r1", "2024-03-01 21:30:00")
            .build();
        let options = EngineOptions {
            utc_offset: FixedOffset::east_opt(3600).unwrap(),
        };
        with_options(&store, &options, |awards| {
            let award = find(awards, "night-owl");
            assert_eq!(ranking_ids(award), vec!["a", "b"]);
            assert_eq!(award.rankings[0].value, 1.0);
            assert_eq!(award.rankings[1].value, 0.0);
        });
    }

    fn timing_league() -> RecordStore {
        LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .competitor("c", "C")
            .round("r1", "")
            .round("r2", "")
            .submit_at("a", "a1", "r1", "2024-01-01T10:00:00Z")
            .submit_at("b", "b1", "r1", "2024-01-02T10:00:00Z")
            .submit_at("c", "c1", "r1", "")
            .submit_at("b", "b2", "r2", "2024-01-08T10:00:00Z")
            .submit_at("c", "c2", "r2", "2024-01-08T10:00:00Z")
            .vote_at("a", "b1", "r1", 3, "2024-01-05T09:00:00Z")
            .vote_at("c", "a1", "r1", 3, "2024-01-04T09:00:00Z")
            .vote_at("c", "b1", "r1", 1, "2024-01-06T09:00:00Z")
            .vote_at("a", "b2", "r2", 2, "garbage")
            .build()
    }

    #[test]
    fn test_dunce_counts_last_submission_and_last_vote() {
        let store = timing_league();
        with_awards(&store, |awards| {
            let award = find(awards, "dunce");
            // r1: b submitted last, c's latest vote is last; r2: tie keeps b
            assert_eq!(ranking_ids(award), vec!["b", "c", "a"]);
            assert_eq!(award.rankings[0].value, 2.0);
            assert_eq!(award.rankings[1].value, 1.0);
            assert_eq!(award.rankings[0].formatted_value, "2× last");
            assert_eq!(award.value.to_string(), "2 times last");
        });
    }

    #[test]
    fn test_eager_beaver_counts_first_submission_and_first_vote() {
        let store = timing_league();
        with_awards(&store, |awards| {
            let award = find(awards, "eager-beaver");
            // r1: a submitted first, c voted first; r2: tie keeps b
            let values: Vec<(String, f64)> = award
                .rankings
                .iter()
                .map(|r| (r.competitor.id.clone(), r.value))
                .collect();
            assert_eq!(
                values,
                vec![("a".into(), 1.0), ("b".into(), 1.0), ("c".into(), 1.0)]
            );
            assert_eq!(award.rankings[0].formatted_value, "1× first");
            assert_eq!(award.value.to_string(), "1 times first");
        });
    }

    #[test]
    fn test_rounds_without_times_award_nobody() {
        let store = LeagueBuilder::new()
            .competitor("a", "A")
            .round("r1", "")
            .submit("a", "t", "r1")
            .vote("a", "t", "r1", 1)
            .build();
        with_awards(&store, |awards| {
            assert_eq!(find(awards, "dunce").rankings[0].value, 0.0);
            assert_eq!(find(awards, "eager-beaver").rankings[0].value, 0.0);
        });
    }
}

//! Rules over round finishing positions.

use std::collections::HashSet;

use crate::awards::rankings::{create_rankings, format_number};
use crate::awards::{Award, AwardContext, AwardDef, SortOrder, headline};
use crate::lenient::chronological_key;
use crate::models::Round;
use crate::tally::Tally;

/// Rounds a competitor must place in before their variance counts.
const CONSISTENCY_MIN_ROUNDS: usize = 5;
/// Placements required in each half of the season for a trend.
const TREND_MIN_PER_HALF: usize = 3;

const MOST_WINS: AwardDef = AwardDef {
    id: "most-wins",
    name: "Most 1st Place Finishes",
    description: "Won the most rounds",
    icon: "crown",
    metric_label: "Wins",
    sort_order: SortOrder::Desc,
};

const CLOSE_SHAVER: AwardDef = AwardDef {
    id: "close-shaver",
    name: "Close Shaver",
    description: "Came 2nd place the most times",
    icon: "medal",
    metric_label: "2nd Places",
    sort_order: SortOrder::Desc,
};

const MOST_CONSISTENT: AwardDef = AwardDef {
    id: "most-consistent",
    name: "Most Consistent",
    description: "Finished in similar positions across rounds",
    icon: "target",
    metric_label: "Variance",
    sort_order: SortOrder::Asc,
};

const FALL_FROM_GRACE: AwardDef = AwardDef {
    id: "fall-from-grace",
    name: "Fall From Grace",
    description: "Started strong but dropped off",
    icon: "trending-down",
    metric_label: "Position Δ",
    sort_order: SortOrder::Desc,
};

const REDEMPTION_ARC: AwardDef = AwardDef {
    id: "redemption-arc",
    name: "Redemption Arc",
    description: "Started slow but rose to the top",
    icon: "trending-up",
    metric_label: "Position Δ",
    sort_order: SortOrder::Desc,
};

/// Count, per competitor, the rounds finished at zero-based `position`.
fn finishes_at<'a>(ctx: &AwardContext<'a, '_>, position: usize) -> Tally<&'a str, i64> {
    let mut counts: Tally<&str, i64> = ctx.seeded();
    for result in ctx.results {
        if let Some(standing) = result.standings.get(position) {
            counts.add(standing.competitor.id.as_str(), 1);
        }
    }
    counts
}

pub(super) fn most_wins<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let wins = finishes_at(ctx, 0);
    let format = |v: f64| format!("{} wins", format_number(v));
    let rankings = create_rankings(
        ctx.store,
        wins.iter().map(|(id, v)| (*id, *v as f64)),
        MOST_WINS.sort_order,
        format,
    );
    let value = headline(&rankings, format, "0 wins");
    MOST_WINS.ranked(rankings, value)
}

pub(super) fn close_shaver<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let seconds = finishes_at(ctx, 1);
    let rankings = create_rankings(
        ctx.store,
        seconds.iter().map(|(id, v)| (*id, *v as f64)),
        CLOSE_SHAVER.sort_order,
        |v| format!("{} silvers", format_number(v)),
    );
    let value = headline(
        &rankings,
        |v| format!("{} silver medals", format_number(v)),
        "0",
    );
    CLOSE_SHAVER.ranked(rankings, value)
}

pub(super) fn most_consistent<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    // One-based positions, in round order
    let mut positions: Tally<&str, Vec<f64>> = Tally::new();
    for result in ctx.results {
        for (i, standing) in result.standings.iter().enumerate() {
            positions
                .entry(standing.competitor.id.as_str())
                .push((i + 1) as f64);
        }
    }

    let variances = positions
        .iter()
        .filter(|(_, p)| p.len() >= CONSISTENCY_MIN_ROUNDS)
        .map(|(id, p)| (*id, population_variance(p)));

    let rankings = create_rankings(ctx.store, variances, MOST_CONSISTENT.sort_order, |v| {
        format!("σ²={v:.2}")
    });
    let value = headline(&rankings, |v| format!("σ² = {v:.2}"), "N/A");
    MOST_CONSISTENT.ranked(rankings, value)
}

fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Average one-based finishing position per half of the season.
struct HalfAverages<'a> {
    first: Tally<&'a str, (f64, usize)>,
    second: Tally<&'a str, (f64, usize)>,
}

impl<'a> HalfAverages<'a> {
    /// Split rounds chronologically: the first `floor(n / 2)` rounds form the
    /// first half, the remainder the second.
    fn build(ctx: &AwardContext<'a, '_>) -> Self {
        let mut rounds: Vec<&Round> = ctx.store.rounds().iter().collect();
        rounds.sort_by_key(|r| chronological_key(&r.created));
        let first_half: HashSet<&str> = rounds[..rounds.len() / 2]
            .iter()
            .map(|r| r.id.as_str())
            .collect();

        let mut first: Tally<&str, (f64, usize)> = Tally::new();
        let mut second: Tally<&str, (f64, usize)> = Tally::new();
        for result in ctx.results {
            let half = if first_half.contains(result.round.id.as_str()) {
                &mut first
            } else {
                &mut second
            };
            for (i, standing) in result.standings.iter().enumerate() {
                let slot = half.entry(standing.competitor.id.as_str());
                slot.0 += (i + 1) as f64;
                slot.1 += 1;
            }
        }

        Self { first, second }
    }

    /// (first-half average, second-half average) for qualifying competitors,
    /// in competitor-table order.
    fn qualifying(&self, ctx: &AwardContext<'a, '_>) -> Tally<&'a str, (f64, f64)> {
        let mut out: Tally<&str, (f64, f64)> = Tally::new();
        for competitor in ctx.store.competitors() {
            let id = competitor.id.as_str();
            if let (Some(&(t1, n1)), Some(&(t2, n2))) = (self.first.get(id), self.second.get(id)) {
                if n1 >= TREND_MIN_PER_HALF && n2 >= TREND_MIN_PER_HALF {
                    out.set(id, (t1 / n1 as f64, t2 / n2 as f64));
                }
            }
        }
        out
    }
}

fn signed_positions(v: f64) -> String {
    let sign = if v > 0.0 { "+" } else { "" };
    format!("{sign}{v:.1} pos")
}

pub(super) fn fall_from_grace<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let halves = HalfAverages::build(ctx).qualifying(ctx);
    let falls = halves.iter().map(|(id, (first, second))| (*id, second - first));

    let rankings = create_rankings(ctx.store, falls, FALL_FROM_GRACE.sort_order, signed_positions);
    let value = headline(&rankings, |v| format!("{v:.1} positions lower"), "N/A");
    FALL_FROM_GRACE.ranked(rankings, value)
}

pub(super) fn redemption_arc<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let halves = HalfAverages::build(ctx).qualifying(ctx);
    let rises = halves.iter().map(|(id, (first, second))| (*id, first - second));

    let rankings = create_rankings(ctx.store, rises, REDEMPTION_ARC.sort_order, signed_positions);
    let value = headline(&rankings, |v| format!("{v:.1} positions higher"), "N/A");
    REDEMPTION_ARC.ranked(rankings, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awards::test_support::*;
    use crate::store::RecordStore;
    use crate::testutil::LeagueBuilder;

    /// Six weekly rounds between `a` and `b`. `a_wins[i]` decides round i.
    fn duel(a_wins: [bool; 6]) -> RecordStore {
        let mut builder = LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .competitor("c", "C");
        // Rounds listed out of chronological order on purpose
        let order = [3usize, 0, 5, 1, 4, 2];
        for &i in &order {
            let round = format!("r{i}");
            builder = builder.round(&round, &format!("2024-01-0{}", i + 1));
        }
        for (i, a_first) in a_wins.iter().enumerate() {
            let round = format!("r{i}");
            let (ta, tb) = (format!("a{i}"), format!("b{i}"));
            let (pa, pb) = if *a_first { (5, 1) } else { (1, 5) };
            builder = builder
                .submit("a", &ta, &round)
                .submit("b", &tb, &round)
                .vote("c", &ta, &round, pa)
                .vote("c", &tb, &round, pb);
        }
        builder.build()
    }

    #[test]
    fn test_wins_and_silvers_follow_standings() {
        let store = duel([true, true, true, true, false, false]);
        with_awards(&store, |awards| {
            let wins = find(awards, "most-wins");
            assert_eq!(ranking_ids(wins), vec!["a", "b", "c"]);
            assert_eq!(wins.rankings[0].value, 4.0);
            assert_eq!(wins.rankings[0].formatted_value, "4 wins");
            assert_eq!(wins.value.to_string(), "4 wins");
            assert_eq!(wins.rankings[2].value, 0.0);

            let silvers = find(awards, "close-shaver");
            assert_eq!(winner_id(silvers).as_deref(), Some("b"));
            assert_eq!(silvers.value.to_string(), "4 silver medals");
            assert_eq!(silvers.rankings[0].formatted_value, "4 silvers");
        });
    }

    #[test]
    fn test_consistency_uses_population_variance() {
        let store = duel([true, true, true, true, false, false]);
        with_awards(&store, |awards| {
            let award = find(awards, "most-consistent");
            // positions a: 1,1,1,1,2,2 and b: 2,2,2,2,1,1 share the same variance
            assert_eq!(ranking_ids(award), vec!["a", "b"]);
            let expected = 2.0 / 9.0;
            assert!((award.rankings[0].value - expected).abs() < 1e-9);
            assert_eq!(award.rankings[0].formatted_value, "σ²=0.22");
            assert_eq!(award.value.to_string(), "σ² = 0.22");
        });
    }

    #[test]
    fn test_consistency_needs_five_rounds() {
        let store = LeagueBuilder::new()
            .competitor("a", "A")
            .round("r1", "")
            .submit("a", "t", "r1")
            .vote("b", "t", "r1", 1)
            .build();
        with_awards(&store, |awards| {
            let award = find(awards, "most-consistent");
            assert!(award.rankings.is_empty());
            assert_eq!(award.value.to_string(), "N/A");
        });
    }

    #[test]
    fn test_fall_and_redemption_split_chronologically() {
        // a wins the first three weeks, then b takes over
        let store = duel([true, true, true, false, false, false]);
        with_awards(&store, |awards| {
            let fall = find(awards, "fall-from-grace");
            assert_eq!(ranking_ids(fall), vec!["a", "b"]);
            assert!((fall.rankings[0].value - 1.0).abs() < 1e-9);
            assert_eq!(fall.rankings[0].formatted_value, "+1.0 pos");
            assert_eq!(fall.rankings[1].formatted_value, "-1.0 pos");
            assert_eq!(fall.value.to_string(), "1.0 positions lower");

            let rise = find(awards, "redemption-arc");
            assert_eq!(winner_id(rise).as_deref(), Some("b"));
            assert_eq!(rise.value.to_string(), "1.0 positions higher");
        });
    }

    #[test]
    fn test_trends_need_three_placements_per_half() {
        let store = duel([true, false, true, false, true, false]);
        let short = LeagueBuilder::new()
            .competitor("a", "A")
            .round("r1", "2024-01-01")
            .round("r2", "2024-01-02")
            .submit("a", "t1", "r1")
            .submit("a", "t2", "r2")
            .vote("x", "t1", "r1", 1)
            .vote("x", "t2", "r2", 1)
            .build();

        with_awards(&store, |awards| {
            assert_eq!(find(awards, "fall-from-grace").rankings.len(), 2);
        });
        with_awards(&short, |awards| {
            let fall = find(awards, "fall-from-grace");
            assert!(fall.rankings.is_empty());
            assert!(fall.winner.is_none());
            assert_eq!(fall.value.to_string(), "N/A");
            assert_eq!(find(awards, "redemption-arc").value.to_string(), "N/A");
        });
    }

    #[test]
    fn test_variance_of_constant_series_is_zero() {
        assert_eq!(population_variance(&[2.0, 2.0, 2.0]), 0.0);
        assert_eq!(population_variance(&[]), 0.0);
        assert!((population_variance(&[1.0, 3.0]) - 1.0).abs() < 1e-12);
    }
}

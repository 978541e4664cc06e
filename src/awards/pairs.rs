//! Pairwise rules. Self-votes and dangling votes never count here.

use crate::awards::rankings::{create_rankings, format_number};
use crate::awards::{Award, AwardContext, AwardDef, AwardRanking, AwardValue, SortOrder};
use crate::tally::Tally;

const BEST_BUDDIES: AwardDef = AwardDef {
    id: "best-buddies",
    name: "Best Buddies",
    description: "Gave each other the most points combined",
    icon: "heart",
    metric_label: "Pts Given",
    sort_order: SortOrder::Desc,
};

const ONE_SIDED_LOVE: AwardDef = AwardDef {
    id: "one-sided-love",
    name: "One Sided Love",
    description: "Gave lots of points to someone who didn't reciprocate",
    icon: "heart-crack",
    metric_label: "Max Diff",
    sort_order: SortOrder::Desc,
};

const SWORN_ENEMIES: AwardDef = AwardDef {
    id: "sworn-enemies",
    name: "Sworn Enemies",
    description: "Gave each other the lowest combined points",
    icon: "swords",
    metric_label: "Pts Received",
    sort_order: SortOrder::Asc,
};

/// Unordered pair of ids, smaller id first.
type Pair<'a> = (&'a str, &'a str);

fn pair<'a>(x: &'a str, y: &'a str) -> Pair<'a> {
    if x <= y { (x, y) } else { (y, x) }
}

/// Combined points exchanged within each pair, in first-vote order.
fn pair_points<'a>(ctx: &AwardContext<'a, '_>) -> Tally<Pair<'a>, i64> {
    let mut points: Tally<Pair<'a>, i64> = Tally::new();
    for vote in ctx.store.votes() {
        if let Some(submitter) = ctx.index.other_recipient(vote) {
            points.add(pair(vote.voter_id.as_str(), submitter), vote.points);
        }
    }
    points
}

/// First pair whose total beats every earlier one under `better`.
fn extreme_pair<'a>(
    points: &Tally<Pair<'a>, i64>,
    better: impl Fn(i64, i64) -> bool,
) -> Option<(Pair<'a>, i64)> {
    let mut best: Option<(Pair<'a>, i64)> = None;
    for (p, &total) in points.iter() {
        match best {
            Some((_, current)) if !better(total, current) => {}
            _ => best = Some((*p, total)),
        }
    }
    best
}

fn pair_award<'a>(
    def: &AwardDef,
    ctx: &AwardContext<'a, '_>,
    extreme: Option<(Pair<'a>, i64)>,
    rankings: Vec<AwardRanking<'a>>,
) -> Award<'a> {
    let (winner, secondary) = match extreme {
        Some(((x, y), _)) => (ctx.store.competitor(x), ctx.store.competitor(y)),
        None => (None, None),
    };
    let value = match extreme {
        Some((_, total)) => format!("{total} combined points"),
        None => "0".to_string(),
    };
    def.award(winner, secondary, rankings, AwardValue::Formatted(value))
}

pub(super) fn best_buddies<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let pairs = pair_points(ctx);
    let best = extreme_pair(&pairs, |candidate, current| candidate > current);

    let mut given: Tally<&str, i64> = ctx.seeded();
    for vote in ctx.store.votes() {
        if ctx.index.other_recipient(vote).is_some() {
            given.add(vote.voter_id.as_str(), vote.points);
        }
    }
    let rankings = create_rankings(
        ctx.store,
        given.iter().map(|(id, v)| (*id, *v as f64)),
        BEST_BUDDIES.sort_order,
        |v| format!("{} pts given", format_number(v)),
    );

    pair_award(&BEST_BUDDIES, ctx, best, rankings)
}

pub(super) fn sworn_enemies<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let pairs = pair_points(ctx);
    let worst = extreme_pair(&pairs, |candidate, current| candidate < current);

    let mut received: Tally<&str, i64> = ctx.seeded();
    for vote in ctx.store.votes() {
        if let Some(submitter) = ctx.index.other_recipient(vote) {
            received.add(submitter, vote.points);
        }
    }
    let rankings = create_rankings(
        ctx.store,
        received.iter().map(|(id, v)| (*id, *v as f64)),
        SWORN_ENEMIES.sort_order,
        |v| format!("{} pts", format_number(v)),
    );

    pair_award(&SWORN_ENEMIES, ctx, worst, rankings)
}

pub(super) fn one_sided_love<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    // giver → receiver → points, both in first-vote order
    let mut directed: Tally<&str, Tally<&str, i64>> = Tally::new();
    for vote in ctx.store.votes() {
        if let Some(submitter) = ctx.index.other_recipient(vote) {
            directed
                .entry(vote.voter_id.as_str())
                .add(submitter, vote.points);
        }
    }

    let mut max_by_giver: Tally<&str, i64> = ctx.seeded();
    let mut best: Option<(&str, &str)> = None;
    let mut best_gap = 0;
    for (&giver, targets) in directed.iter() {
        for (&receiver, &given) in targets.iter() {
            let returned = directed
                .get(receiver)
                .and_then(|back| back.get(giver))
                .copied()
                .unwrap_or(0);
            let gap = given.saturating_sub(returned);

            let slot = max_by_giver.entry(giver);
            if gap > *slot {
                *slot = gap;
            }
            if gap > best_gap {
                best_gap = gap;
                best = Some((giver, receiver));
            }
        }
    }

    let rankings = create_rankings(
        ctx.store,
        max_by_giver.iter().map(|(id, v)| (*id, *v as f64)),
        ONE_SIDED_LOVE.sort_order,
        |v| format!("+{} diff", format_number(v)),
    );
    let (winner, secondary) = match best {
        Some((giver, receiver)) => (ctx.store.competitor(giver), ctx.store.competitor(receiver)),
        None => (None, None),
    };
    let value = AwardValue::Formatted(format!("{best_gap} point difference"));
    ONE_SIDED_LOVE.award(winner, secondary, rankings, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::awards::test_support::*;
    use crate::store::RecordStore;
    use crate::testutil::LeagueBuilder;

    fn secondary_id(award: &Award<'_>) -> Option<String> {
        award.winner_secondary.map(|c| c.id.clone())
    }

    /// a ↔ b trade big votes, c gives to a without reply, b and c feud.
    fn league() -> RecordStore {
        LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .competitor("c", "C")
            .round("r1", "")
            .round("r2", "")
            .submit("a", "a1", "r1")
            .submit("b", "b1", "r1")
            .submit("c", "c1", "r1")
            .submit("a", "a2", "r2")
            .submit("b", "b2", "r2")
            .submit("c", "c2", "r2")
            .vote("b", "a1", "r1", 6)
            .vote("a", "b1", "r1", 5)
            .vote("c", "a1", "r1", 7)
            .vote("b", "c1", "r1", -2)
            .vote("c", "b2", "r2", -1)
            .vote("a", "b2", "r2", 3)
            .vote("a", "a2", "r2", 8)
            .build()
    }

    #[test]
    fn test_best_buddies_reports_pair_in_id_order() {
        let store = league();
        with_awards(&store, |awards| {
            let award = find(awards, "best-buddies");
            assert_eq!(winner_id(award).as_deref(), Some("a"));
            assert_eq!(secondary_id(award).as_deref(), Some("b"));
            assert_eq!(award.value.to_string(), "14 combined points");
            // a gave 5 + 3 to others; the self-vote is ignored
            assert_eq!(ranking_ids(award), vec!["a", "c", "b"]);
            assert_eq!(award.rankings[0].value, 8.0);
            assert_eq!(award.rankings[0].formatted_value, "8 pts given");
        });
    }

    #[test]
    fn test_sworn_enemies_reports_lowest_pair() {
        let store = league();
        with_awards(&store, |awards| {
            let award = find(awards, "sworn-enemies");
            assert_eq!(winner_id(award).as_deref(), Some("b"));
            assert_eq!(secondary_id(award).as_deref(), Some("c"));
            assert_eq!(award.value.to_string(), "-3 combined points");
            // received from others, ascending
            assert_eq!(ranking_ids(award), vec!["c", "b", "a"]);
            assert_eq!(award.rankings[0].formatted_value, "-2 pts");
        });
    }

    #[test]
    fn test_one_sided_love_finds_largest_gap() {
        let store = league();
        with_awards(&store, |awards| {
            let award = find(awards, "one-sided-love");
            assert_eq!(winner_id(award).as_deref(), Some("c"));
            assert_eq!(secondary_id(award).as_deref(), Some("a"));
            assert_eq!(award.value.to_string(), "7 point difference");
            assert_eq!(award.rankings[0].formatted_value, "+7 diff");
            let b = award.rankings.iter().find(|r| r.competitor.id == "b").unwrap();
            assert_eq!(b.value, 0.0);
        });
    }

    #[test]
    fn test_self_votes_leave_pairwise_pools_empty() {
        let store = LeagueBuilder::new()
            .competitor("a", "A")
            .competitor("b", "B")
            .round("r1", "")
            .submit("a", "t", "r1")
            .vote("a", "t", "r1", 3)
            .build();
        with_awards(&store, |awards| {
            for id in ["best-buddies", "sworn-enemies", "one-sided-love"] {
                let award = find(awards, id);
                assert!(award.winner.is_none(), "{id}");
                assert!(award.winner_secondary.is_none(), "{id}");
            }
            assert_eq!(find(awards, "best-buddies").value.to_string(), "0");
            assert_eq!(find(awards, "sworn-enemies").value.to_string(), "0");
        });
    }

    #[test]
    fn test_pair_is_unordered() {
        assert_eq!(pair("b", "a"), ("a", "b"));
        assert_eq!(pair("a", "b"), ("a", "b"));
    }
}

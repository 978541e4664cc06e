//! Rules over raw vote points: totals, eights, downvotes, averages, comments.

use crate::awards::rankings::{create_rankings, format_number, format_thousands};
use crate::awards::{Award, AwardContext, AwardDef, AwardValue, SortOrder, headline};
use crate::tally::Tally;

/// Votes cast before a voter's average counts.
const CONTRARIAN_MIN_VOTES: usize = 5;
/// The maximum single-vote allocation.
const EIGHT: i64 = 8;

const OVERALL_WINNER: AwardDef = AwardDef {
    id: "overall-winner",
    name: "Overall Winner",
    description: "The most points across all rounds",
    icon: "trophy",
    metric_label: "Points",
    sort_order: SortOrder::Desc,
};

const OCTOPUS: AwardDef = AwardDef {
    id: "octopus",
    name: "The Octopus",
    description: "Received the most 8-point votes",
    icon: "star",
    metric_label: "8s Received",
    sort_order: SortOrder::Desc,
};

const GENEROUS_OCTOPUS: AwardDef = AwardDef {
    id: "generous-octopus",
    name: "The Generous Octopus",
    description: "Gave out the most 8-point votes",
    icon: "gift",
    metric_label: "8s Given",
    sort_order: SortOrder::Desc,
};

const PUBLIC_ENEMY: AwardDef = AwardDef {
    id: "public-enemy",
    name: "Public Enemy",
    description: "Received the most downvotes",
    icon: "skull",
    metric_label: "Downvote Pts",
    sort_order: SortOrder::Desc,
};

const CONTRARIAN: AwardDef = AwardDef {
    id: "contrarian",
    name: "The Contrarian",
    description: "Gives the lowest scores on average",
    icon: "thumbs-down",
    metric_label: "Avg Given",
    sort_order: SortOrder::Asc,
};

const NARRATOR: AwardDef = AwardDef {
    id: "narrator",
    name: "The Narrator",
    description: "Left the most extensive comments",
    icon: "message-square",
    metric_label: "Characters",
    sort_order: SortOrder::Desc,
};

fn as_values<'k>(tally: &'k Tally<&'k str, i64>) -> impl Iterator<Item = (&'k str, f64)> {
    tally.iter().map(|(id, v)| (*id, *v as f64))
}

pub(super) fn overall_winner<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let mut totals: Tally<&str, i64> = ctx.seeded();
    for vote in ctx.store.votes() {
        if let Some(submitter) = ctx.index.recipient(vote) {
            totals.add(submitter, vote.points);
        }
    }

    let rankings = create_rankings(ctx.store, as_values(&totals), OVERALL_WINNER.sort_order, |v| {
        format!("{} pts", format_number(v))
    });
    let value = AwardValue::Numeric(rankings.first().map(|r| r.value).unwrap_or(0.0));
    OVERALL_WINNER.ranked(rankings, value)
}

pub(super) fn octopus<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let mut eights: Tally<&str, i64> = ctx.seeded();
    for vote in ctx.store.votes().iter().filter(|v| v.points == EIGHT) {
        if let Some(submitter) = ctx.index.recipient(vote) {
            eights.add(submitter, 1);
        }
    }

    let format = |v: f64| format!("{} eights", format_number(v));
    let rankings = create_rankings(ctx.store, as_values(&eights), OCTOPUS.sort_order, format);
    let value = headline(&rankings, format, "0 eights");
    OCTOPUS.ranked(rankings, value)
}

pub(super) fn generous_octopus<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let mut eights: Tally<&str, i64> = ctx.seeded();
    for vote in ctx.store.votes().iter().filter(|v| v.points == EIGHT) {
        eights.add(vote.voter_id.as_str(), 1);
    }

    let rankings = create_rankings(
        ctx.store,
        as_values(&eights),
        GENEROUS_OCTOPUS.sort_order,
        |v| format!("{} eights", format_number(v)),
    );
    let value = headline(
        &rankings,
        |v| format!("{} eights given", format_number(v)),
        "0 eights",
    );
    GENEROUS_OCTOPUS.ranked(rankings, value)
}

pub(super) fn public_enemy<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let mut downvotes: Tally<&str, i64> = ctx.seeded();
    for vote in ctx.store.votes().iter().filter(|v| v.points < 0) {
        if let Some(submitter) = ctx.index.recipient(vote) {
            downvotes.add(submitter, vote.points.saturating_abs());
        }
    }

    let rankings = create_rankings(ctx.store, as_values(&downvotes), PUBLIC_ENEMY.sort_order, |v| {
        format!("{} pts", format_number(v))
    });
    let value = headline(
        &rankings,
        |v| format!("{} downvote points", format_number(v)),
        "0",
    );
    PUBLIC_ENEMY.ranked(rankings, value)
}

pub(super) fn contrarian<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    // (votes cast, points given) over every vote, resolved or not
    let mut given: Tally<&str, (usize, i64)> = Tally::new();
    for vote in ctx.store.votes() {
        let slot = given.entry(vote.voter_id.as_str());
        slot.0 += 1;
        slot.1 = slot.1.saturating_add(vote.points);
    }

    let mut averages: Tally<&str, f64> = Tally::new();
    for competitor in ctx.store.competitors() {
        let id = competitor.id.as_str();
        if let Some(&(count, total)) = given.get(id) {
            if count >= CONTRARIAN_MIN_VOTES {
                averages.set(id, total as f64 / count as f64);
            }
        }
    }

    let rankings = create_rankings(
        ctx.store,
        averages.iter().map(|(id, v)| (*id, *v)),
        CONTRARIAN.sort_order,
        |v| format!("{v:.2}"),
    );
    let value = headline(&rankings, |v| format!("{v:.2} avg points given"), "N/A");
    CONTRARIAN.ranked(rankings, value)
}

pub(super) fn narrator<'a>(ctx: &AwardContext<'a, '_>) -> Award<'a> {
    let mut lengths: Tally<&str, i64> = ctx.seeded();
    for vote in ctx.store.votes().iter().filter(|v| !v.comment.is_empty()) {
        lengths.add(vote.voter_id.as_str(), vote.comment.chars().count() as i64);
    }

    let rankings = create_rankings(ctx.store, as_values(&lengths), NARRATOR.sort_order, format_thousands);
    let value = headline(
        &rankings,
        |v| format!("{} characters", format_thousands(v)),
        "0",
    );
    NARRATOR.ranked(rankings, value)
}

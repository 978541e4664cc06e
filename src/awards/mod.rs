//! Awards engine.
//!
//! Each award is an independent rule over one shared [`AwardContext`]: the
//! record store, the join index and the round results. Rules produce a full
//! ranking (competitors only, sorted by the award's declared order) plus a
//! headline winner and value. [`calculate_awards`] returns all seventeen in
//! their fixed declaration order.

mod pairs;
mod placement;
mod points;
mod rankings;
mod timing;

use serde::Serialize;

use crate::config::EngineOptions;
use crate::index::JoinIndex;
use crate::models::Competitor;
use crate::standings::RoundResult;
use crate::store::RecordStore;
use crate::tally::Tally;

pub use rankings::{format_number, format_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Desc,
    Asc,
}

/// Headline value of an award: a canonical number, or one formatted string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AwardValue {
    Numeric(f64),
    Formatted(String),
}

impl std::fmt::Display for AwardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwardValue::Numeric(v) => write!(f, "{}", format_number(*v)),
            AwardValue::Formatted(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRanking<'a> {
    pub competitor: &'a Competitor,
    pub value: f64,
    pub formatted_value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Award<'a> {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub winner: Option<&'a Competitor>,
    /// Second member of the winning pair (pairwise awards only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_secondary: Option<&'a Competitor>,
    pub value: AwardValue,
    pub rankings: Vec<AwardRanking<'a>>,
    pub metric_label: &'static str,
    pub sort_order: SortOrder,
}

/// Static description of one award rule.
pub(crate) struct AwardDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub metric_label: &'static str,
    pub sort_order: SortOrder,
}

impl AwardDef {
    /// Award whose winner is the top of its rankings.
    pub(crate) fn ranked<'a>(&self, rankings: Vec<AwardRanking<'a>>, value: AwardValue) -> Award<'a> {
        let winner = rankings.first().map(|r| r.competitor);
        self.award(winner, None, rankings, value)
    }

    pub(crate) fn award<'a>(
        &self,
        winner: Option<&'a Competitor>,
        winner_secondary: Option<&'a Competitor>,
        rankings: Vec<AwardRanking<'a>>,
        value: AwardValue,
    ) -> Award<'a> {
        Award {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            winner,
            winner_secondary,
            value,
            rankings,
            metric_label: self.metric_label,
            sort_order: self.sort_order,
        }
    }
}

/// Formatted headline from the leading ranking, or a fixed fallback.
pub(crate) fn headline(
    rankings: &[AwardRanking<'_>],
    format: impl Fn(f64) -> String,
    fallback: &str,
) -> AwardValue {
    AwardValue::Formatted(
        rankings
            .first()
            .map(|r| format(r.value))
            .unwrap_or_else(|| fallback.to_string()),
    )
}

/// Everything an award rule may read. Built once, shared by reference.
pub struct AwardContext<'a, 'r> {
    pub store: &'a RecordStore,
    pub index: &'r JoinIndex<'a>,
    pub results: &'r [RoundResult<'a>],
    pub options: &'r EngineOptions,
}

impl<'a> AwardContext<'a, '_> {
    /// Grouping pre-seeded with every competitor id, in table order.
    pub(crate) fn seeded<V: Default>(&self) -> Tally<&'a str, V> {
        Tally::seeded(self.store.competitors().iter().map(|c| c.id.as_str()))
    }
}

/// Every award, in declaration order.
pub fn calculate_awards<'a>(ctx: &AwardContext<'a, '_>) -> Vec<Award<'a>> {
    let awards = vec![
        points::overall_winner(ctx),
        placement::most_wins(ctx),
        points::octopus(ctx),
        points::generous_octopus(ctx),
        placement::close_shaver(ctx),
        points::public_enemy(ctx),
        pairs::best_buddies(ctx),
        pairs::one_sided_love(ctx),
        pairs::sworn_enemies(ctx),
        points::contrarian(ctx),
        placement::most_consistent(ctx),
        points::narrator(ctx),
        placement::fall_from_grace(ctx),
        placement::redemption_arc(ctx),
        timing::night_owl(ctx),
        timing::dunce(ctx),
        timing::eager_beaver(ctx),
    ];
    log::debug!(
        "Computed {} awards ({} with a winner)",
        awards.len(),
        awards.iter().filter(|a| a.winner.is_some()).count()
    );
    awards
}

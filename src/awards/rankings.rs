use std::cmp::Ordering;

use crate::awards::{AwardRanking, SortOrder};
use crate::models::Competitor;
use crate::store::RecordStore;

/// Rank a grouping of competitor id → value.
///
/// Ids without a competitor row are dropped. The sort is stable, so equal
/// values keep the grouping's insertion order.
pub(crate) fn create_rankings<'a, 'k>(
    store: &'a RecordStore,
    data: impl IntoIterator<Item = (&'k str, f64)>,
    order: SortOrder,
    format: impl Fn(f64) -> String,
) -> Vec<AwardRanking<'a>> {
    let mut entries: Vec<(&'a Competitor, f64)> = data
        .into_iter()
        .filter_map(|(id, value)| store.competitor(id).map(|c| (c, value)))
        .collect();

    match order {
        SortOrder::Desc => {
            entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
        }
        SortOrder::Asc => {
            entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        }
    }

    entries
        .into_iter()
        .map(|(competitor, value)| AwardRanking {
            competitor,
            value,
            formatted_value: format(value),
        })
        .collect()
}

/// Render a metric value: integral values without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Integral value with `,` thousands separators (`12345` → `12,345`).
pub fn format_thousands(value: f64) -> String {
    let plain = format_number(value);
    let (sign, rest) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

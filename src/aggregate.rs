//! Aggregation
//!
//! Merges the per-recipe ingredient quantities of a shopping cart into one
//! line per ingredient and unit.

use rustc_hash::FxHashMap;

use crate::lines::{AggregatedLine, CartLineItem};

/// Sum cart line items sharing the same ingredient name and measurement unit.
///
/// Lines are grouped on the exact `(ingredient_name, measurement_unit)` pair, so
/// the same ingredient measured in different units stays on separate lines. The
/// output keeps the order in which each pair was first seen. Amounts are summed
/// as given; validating them is the job of whoever wrote the recipe.
pub fn aggregate<I>(lines: I) -> Vec<AggregatedLine>
where
    I: IntoIterator<Item = CartLineItem>,
{
    let lines = lines.into_iter();

    let mut positions: FxHashMap<(String, String), usize> = FxHashMap::default();
    let mut aggregated: Vec<AggregatedLine> = Vec::with_capacity(lines.size_hint().0);

    for line in lines {
        let key = (line.ingredient_name, line.measurement_unit);

        if let Some(existing) = positions
            .get(&key)
            .and_then(|position| aggregated.get_mut(*position))
        {
            existing.total_amount += line.amount;
            continue;
        }

        positions.insert(key.clone(), aggregated.len());

        let (ingredient_name, measurement_unit) = key;

        aggregated.push(AggregatedLine {
            ingredient_name,
            measurement_unit,
            total_amount: line.amount,
        });
    }

    aggregated
}

use super::score::rice_score;
use crate::backlog::domain::{
    BacklogItem, Computed, NextStep, Rationale, RankedItem, Timeframe,
};
use std::cmp::Ordering;

/// Score every item and order the backlog by descending RICE score.
///
/// Each item is scored from its own inputs; the call-level timeframe
/// overwrites whatever timeframe the item carried, so the whole ranking
/// displays against one window. The sort is stable, so items with equal
/// scores keep their input order. Ranks are 1-based positions after the
/// sort; equal scores still receive distinct sequential ranks.
pub fn rank_items(items: Vec<BacklogItem>, timeframe: Timeframe) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = items
        .into_iter()
        .map(|mut item| {
            let score = rice_score(
                item.inputs.reach.value,
                item.inputs.impact,
                item.inputs.confidence,
                item.inputs.effort,
            );
            item.inputs.reach.timeframe = timeframe;

            RankedItem {
                item,
                computed: Computed {
                    rice_score: score,
                    rank: 0,
                },
                rationale: Rationale::default(),
                recommended_next_step: NextStep::default(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.computed
            .rice_score
            .partial_cmp(&a.computed.rice_score)
            .unwrap_or(Ordering::Equal)
    });

    for (position, entry) in ranked.iter_mut().enumerate() {
        entry.computed.rank = position as u32 + 1;
    }

    ranked
}

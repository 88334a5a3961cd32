use crate::backlog::domain::RankedItem;
use serde::{Deserialize, Serialize};

/// Maximum entries per curated list.
pub const SUMMARY_LIST_CAP: usize = 3;
/// Minimum score for a quick win.
pub const QUICK_WIN_MIN_SCORE: f64 = 20.0;
/// Maximum effort for a quick win.
pub const QUICK_WIN_MAX_EFFORT: f64 = 8.0;
/// Maximum confidence for a high-risk/high-reward bet.
pub const HIGH_RISK_MAX_CONFIDENCE: f64 = 60.0;
/// Minimum impact for a high-risk/high-reward bet.
pub const HIGH_RISK_MIN_IMPACT: f64 = 2.0;

/// Curated item-id lists derived from a ranked backlog.
///
/// The filters are independent, so one item may appear in several lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub top3: Vec<String>,
    pub quick_wins: Vec<String>,
    pub high_risk_high_reward: Vec<String>,
}

/// Derive the summary lists from items already in ranked order.
pub fn build_summary(items: &[RankedItem]) -> Summary {
    let top3 = items
        .iter()
        .take(SUMMARY_LIST_CAP)
        .map(|entry| entry.item.item_id.clone())
        .collect();

    let quick_wins = items
        .iter()
        .filter(|entry| {
            entry.computed.rice_score >= QUICK_WIN_MIN_SCORE
                && entry.item.inputs.effort <= QUICK_WIN_MAX_EFFORT
        })
        .take(SUMMARY_LIST_CAP)
        .map(|entry| entry.item.item_id.clone())
        .collect();

    let high_risk_high_reward = items
        .iter()
        .filter(|entry| {
            entry.item.inputs.confidence <= HIGH_RISK_MAX_CONFIDENCE
                && entry.item.inputs.impact >= HIGH_RISK_MIN_IMPACT
        })
        .take(SUMMARY_LIST_CAP)
        .map(|entry| entry.item.item_id.clone())
        .collect();

    Summary {
        top3,
        quick_wins,
        high_risk_high_reward,
    }
}

use super::score::rice_score;
use crate::backlog::domain::RankedItem;
use serde::{Deserialize, Serialize};

/// Single-factor score perturbations for one ranked item.
///
/// Each band varies exactly one input and holds the others at their original
/// values. There is deliberately no `reach_plus20` band; only the downside
/// of reach is explored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityBands {
    pub base_score: f64,
    pub confidence_minus20: f64,
    pub confidence_plus20: f64,
    pub effort_minus20: f64,
    pub effort_plus20: f64,
    pub reach_minus20: f64,
}

/// Recompute the score under each perturbation.
///
/// `base_score` is read from the item's stored computed score, not
/// recomputed. Confidence shifts are clamped to `[0, 100]` before scoring.
pub fn sensitivity(item: &RankedItem) -> SensitivityBands {
    let reach = item.item.inputs.reach.value;
    let impact = item.item.inputs.impact;
    let confidence = item.item.inputs.confidence;
    let effort = item.item.inputs.effort;

    SensitivityBands {
        base_score: item.computed.rice_score,
        confidence_minus20: rice_score(reach, impact, (confidence - 20.0).clamp(0.0, 100.0), effort),
        confidence_plus20: rice_score(reach, impact, (confidence + 20.0).clamp(0.0, 100.0), effort),
        effort_minus20: rice_score(reach, impact, confidence, effort * 0.8),
        effort_plus20: rice_score(reach, impact, confidence, effort * 1.2),
        reach_minus20: rice_score(reach * 0.8, impact, confidence, effort),
    }
}

use crate::backlog::domain::{
    BacklogItem, EffortUnit, ItemInputs, ReachEstimate, ReachUnit, Timeframe,
};
use crate::backlog::validation::ScoreRequest;

pub(crate) fn item(
    item_id: &str,
    reach: f64,
    impact: f64,
    confidence: f64,
    effort: f64,
) -> BacklogItem {
    BacklogItem {
        item_id: item_id.to_string(),
        title: format!("Item {item_id}"),
        description: String::new(),
        evidence: String::new(),
        inputs: ItemInputs {
            reach: ReachEstimate {
                value: reach,
                unit: ReachUnit::Users,
                timeframe: Timeframe::Month,
            },
            impact,
            confidence,
            effort,
        },
    }
}

pub(crate) fn item_with_evidence(
    item_id: &str,
    reach: f64,
    impact: f64,
    confidence: f64,
    effort: f64,
    evidence: &str,
) -> BacklogItem {
    let mut item = item(item_id, reach, impact, confidence, effort);
    item.evidence = evidence.to_string();
    item
}

/// Two-item backlog matching the canonical worked examples: scores 10.00
/// and 150.00.
pub(crate) fn worked_examples() -> Vec<BacklogItem> {
    vec![
        item("low", 100.0, 1.0, 50.0, 5.0),
        item("high", 500.0, 3.0, 80.0, 8.0),
    ]
}

pub(crate) fn request(items: Vec<BacklogItem>) -> ScoreRequest {
    ScoreRequest {
        timeframe: Timeframe::Month,
        effort_unit: EffortUnit::Days,
        items,
    }
}

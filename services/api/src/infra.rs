use metrics_exporter_prometheus::PrometheusHandle;
use rice_backlog::backlog::{
    EffortUnit, ItemNotes, NextStep, NextStepKind, NotesMeta, ProviderItem, Rationale,
    RationaleError, RationaleNotes, RationaleProvider, Timeframe, HIGH_RISK_MIN_IMPACT,
    QUICK_WIN_MAX_EFFORT, QUICK_WIN_MIN_SCORE,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-process rationale provider assembling explanation text from the
/// computed numbers. Deterministic by construction, so the service works
/// identically with or without a generative backend wired in its place.
#[derive(Debug, Default, Clone)]
pub(crate) struct TemplateRationaleProvider;

impl RationaleProvider for TemplateRationaleProvider {
    fn annotate(
        &self,
        timeframe: Timeframe,
        effort_unit: EffortUnit,
        items: &[ProviderItem],
    ) -> Result<RationaleNotes, RationaleError> {
        let total = items.len();
        let mut clarifying_questions = Vec::new();

        let item_notes = items
            .iter()
            .map(|item| {
                if item.evidence.trim().is_empty() {
                    clarifying_questions.push(format!(
                        "What evidence supports the reach estimate for '{}'?",
                        item.title
                    ));
                }
                ItemNotes {
                    item_id: item.item_id.clone(),
                    rationale: Rationale {
                        why_this_rank: why_this_rank(item, total, timeframe, effort_unit),
                        key_assumptions: key_assumptions(item, timeframe),
                        evidence_gaps: evidence_gaps(&item.evidence),
                    },
                    recommended_next_step: next_step(item),
                }
            })
            .collect();

        Ok(RationaleNotes {
            meta: NotesMeta {
                confidence_note:
                    "Rationale generated from deterministic templates over the computed scores."
                        .to_string(),
                assumptions: vec![
                    "Scores reflect caller-supplied estimates, not measured outcomes.".to_string(),
                ],
                clarifying_questions,
            },
            items: item_notes,
        })
    }
}

fn why_this_rank(
    item: &ProviderItem,
    total: usize,
    timeframe: Timeframe,
    effort_unit: EffortUnit,
) -> String {
    format!(
        "Ranked {} of {} with a RICE score of {}. Reaching {} {} per {} at impact {} and {}% confidence justifies {} {} of effort relative to the rest of the backlog.",
        item.computed.rank,
        total,
        item.computed.rice_score,
        item.inputs.reach.value,
        item.inputs.reach.unit.label(),
        timeframe.label(),
        item.inputs.impact,
        item.inputs.confidence,
        item.inputs.effort,
        effort_unit.label(),
    )
}

fn key_assumptions(item: &ProviderItem, timeframe: Timeframe) -> Vec<String> {
    vec![
        format!(
            "Reach of {} {} holds for the coming {}.",
            item.inputs.reach.value,
            item.inputs.reach.unit.label(),
            timeframe.label()
        ),
        format!(
            "Impact multiplier {} is realistic for every affected {}.",
            item.inputs.impact,
            singular(item.inputs.reach.unit.label())
        ),
    ]
}

fn singular(unit: &str) -> &str {
    unit.strip_suffix('s').unwrap_or(unit)
}

fn evidence_gaps(evidence: &str) -> Vec<String> {
    if evidence.trim().is_empty() {
        vec!["No evidence provided.".to_string()]
    } else {
        Vec::new()
    }
}

fn next_step(item: &ProviderItem) -> NextStep {
    let inputs = &item.inputs;
    let score = item.computed.rice_score;

    if inputs.confidence < 50.0 {
        NextStep {
            kind: NextStepKind::Research,
            suggestion: format!(
                "Run discovery to raise confidence above 50% before committing to '{}'.",
                item.title
            ),
            success_metric: "Confidence estimate backed by at least one measured signal."
                .to_string(),
        }
    } else if score >= QUICK_WIN_MIN_SCORE && inputs.effort <= QUICK_WIN_MAX_EFFORT {
        NextStep {
            kind: NextStepKind::Ship,
            suggestion: format!("Schedule '{}' into the next cycle and ship it.", item.title),
            success_metric: "Realized reach within 20% of the estimate after launch.".to_string(),
        }
    } else if inputs.impact >= HIGH_RISK_MIN_IMPACT {
        NextStep {
            kind: NextStepKind::Experiment,
            suggestion: format!(
                "De-risk '{}' with a scoped experiment before the full build.",
                item.title
            ),
            success_metric: "Experiment confirms the impact estimate on a leading indicator."
                .to_string(),
        }
    } else {
        NextStep {
            kind: NextStepKind::Defer,
            suggestion: format!(
                "Defer '{}' until its score clears the current quick wins.",
                item.title
            ),
            success_metric: "Re-scored above the deferral threshold in a future cycle.".to_string(),
        }
    }
}

pub(crate) fn parse_timeframe(raw: &str) -> Result<Timeframe, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "week" => Ok(Timeframe::Week),
        "month" => Ok(Timeframe::Month),
        "quarter" => Ok(Timeframe::Quarter),
        other => Err(format!("unknown timeframe '{other}' (expected week|month|quarter)")),
    }
}

pub(crate) fn parse_effort_unit(raw: &str) -> Result<EffortUnit, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "days" => Ok(EffortUnit::Days),
        "points" => Ok(EffortUnit::Points),
        other => Err(format!("unknown effort unit '{other}' (expected days|points)")),
    }
}

#[cfg(test)]
pub(crate) struct FailingRationaleProvider;

#[cfg(test)]
impl RationaleProvider for FailingRationaleProvider {
    fn annotate(
        &self,
        _timeframe: Timeframe,
        _effort_unit: EffortUnit,
        _items: &[ProviderItem],
    ) -> Result<RationaleNotes, RationaleError> {
        Err(RationaleError::Unavailable {
            reason: "simulated outage".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rice_backlog::backlog::{rank_items, provider_payload, BacklogItem, ItemInputs, ReachEstimate, ReachUnit};

    fn sample(confidence: f64, effort: f64, evidence: &str) -> BacklogItem {
        BacklogItem {
            item_id: "s1".to_string(),
            title: "Sample".to_string(),
            description: String::new(),
            evidence: evidence.to_string(),
            inputs: ItemInputs {
                reach: ReachEstimate {
                    value: 1000.0,
                    unit: ReachUnit::Users,
                    timeframe: Timeframe::Month,
                },
                impact: 2.0,
                confidence,
                effort,
            },
        }
    }

    #[test]
    fn template_provider_is_deterministic() {
        let ranked = rank_items(vec![sample(80.0, 4.0, "survey")], Timeframe::Month);
        let payload = provider_payload(&ranked);
        let provider = TemplateRationaleProvider;

        let first = provider
            .annotate(Timeframe::Month, EffortUnit::Days, &payload)
            .expect("annotates");
        let second = provider
            .annotate(Timeframe::Month, EffortUnit::Days, &payload)
            .expect("annotates");

        assert_eq!(first, second);
        assert_eq!(first.items.len(), 1);
        assert!(first.items[0].rationale.why_this_rank.starts_with("Ranked 1 of 1"));
    }

    #[test]
    fn low_confidence_items_get_a_research_step() {
        let ranked = rank_items(vec![sample(30.0, 4.0, "")], Timeframe::Month);
        let payload = provider_payload(&ranked);

        let notes = TemplateRationaleProvider
            .annotate(Timeframe::Month, EffortUnit::Days, &payload)
            .expect("annotates");

        assert_eq!(notes.items[0].recommended_next_step.kind, NextStepKind::Research);
        assert_eq!(
            notes.items[0].rationale.evidence_gaps,
            vec!["No evidence provided.".to_string()]
        );
        assert_eq!(notes.meta.clarifying_questions.len(), 1);
    }

    #[test]
    fn confident_quick_wins_get_a_ship_step() {
        // 1000 * 2 * 0.8 / 4 = 400, well over the quick-win floor.
        let ranked = rank_items(vec![sample(80.0, 4.0, "interviews")], Timeframe::Month);
        let payload = provider_payload(&ranked);

        let notes = TemplateRationaleProvider
            .annotate(Timeframe::Month, EffortUnit::Days, &payload)
            .expect("annotates");

        assert_eq!(notes.items[0].recommended_next_step.kind, NextStepKind::Ship);
    }
}

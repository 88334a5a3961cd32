//! Boundary with the generated-text collaborator.
//!
//! Scores and ranks are computed deterministically before any rationale text
//! exists; a provider annotates the ranked items by id afterwards. The
//! provider is treated as unreliable: whatever it fails to supply is filled
//! with deterministic fallback text, and the request still succeeds.

use crate::backlog::domain::{
    Computed, EffortUnit, ItemInputs, NextStep, NextStepKind, Rationale, RankedItem, Timeframe,
};
use serde::{Deserialize, Serialize};

/// Most clarifying questions a provider may surface per response.
pub const MAX_CLARIFYING_QUESTIONS: usize = 6;

/// Response-level commentary from the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesMeta {
    pub confidence_note: String,
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub clarifying_questions: Vec<String>,
}

/// Per-item annotation from the provider, matched back by item id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNotes {
    pub item_id: String,
    pub rationale: Rationale,
    pub recommended_next_step: NextStep,
}

/// Everything a rationale provider returns. Scores and ranks are absent on
/// purpose: the provider never gets to change them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RationaleNotes {
    pub meta: NotesMeta,
    pub items: Vec<ItemNotes>,
}

/// The sanitized view of a ranked item handed to the provider: inputs and
/// computed results only, no rationale placeholders to parrot back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderItem {
    pub item_id: String,
    pub title: String,
    pub description: String,
    pub evidence: String,
    pub inputs: ItemInputs,
    pub computed: Computed,
}

/// Build the provider payload from ranked items.
pub fn provider_payload(items: &[RankedItem]) -> Vec<ProviderItem> {
    items
        .iter()
        .map(|entry| ProviderItem {
            item_id: entry.item.item_id.clone(),
            title: entry.item.title.clone(),
            description: entry.item.description.clone(),
            evidence: entry.item.evidence.clone(),
            inputs: entry.item.inputs,
            computed: entry.computed,
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum RationaleError {
    #[error("rationale provider unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("rationale provider returned malformed notes: {reason}")]
    Malformed { reason: String },
}

/// Source of generated rationale text. Implementations live outside the
/// core; the service decides which one to wire in.
pub trait RationaleProvider {
    fn annotate(
        &self,
        timeframe: Timeframe,
        effort_unit: EffortUnit,
        items: &[ProviderItem],
    ) -> Result<RationaleNotes, RationaleError>;
}

/// Attach provider notes to the ranked items, matching by item id.
///
/// Items the provider skipped get deterministic fallback text. Computed
/// scores and ranks pass through untouched regardless of what the provider
/// returned.
pub fn merge_notes(ranked: Vec<RankedItem>, notes: &RationaleNotes) -> Vec<RankedItem> {
    ranked
        .into_iter()
        .map(|mut entry| {
            match notes
                .items
                .iter()
                .find(|note| note.item_id == entry.item.item_id)
            {
                Some(note) => {
                    entry.rationale = note.rationale.clone();
                    entry.recommended_next_step = note.recommended_next_step.clone();
                }
                None => {
                    entry.rationale = Rationale {
                        why_this_rank: "Ranked by RICE score using provided inputs.".to_string(),
                        key_assumptions: Vec::new(),
                        evidence_gaps: evidence_gaps(&entry.item.evidence),
                    };
                    entry.recommended_next_step = NextStep {
                        kind: NextStepKind::Research,
                        suggestion: "Gather missing evidence and validate reach/impact assumptions."
                            .to_string(),
                        success_metric: "Validated impact on a primary KPI.".to_string(),
                    };
                }
            }
            entry
        })
        .collect()
}

/// Fully deterministic notes used when the provider fails outright.
pub fn fallback_notes(ranked: &[RankedItem]) -> RationaleNotes {
    RationaleNotes {
        meta: NotesMeta {
            confidence_note: "AI rationale unavailable. Using deterministic scoring only."
                .to_string(),
            assumptions: Vec::new(),
            clarifying_questions: Vec::new(),
        },
        items: ranked
            .iter()
            .map(|entry| ItemNotes {
                item_id: entry.item.item_id.clone(),
                rationale: Rationale {
                    why_this_rank: "Ranked by deterministic RICE score from the provided inputs."
                        .to_string(),
                    key_assumptions: Vec::new(),
                    evidence_gaps: evidence_gaps(&entry.item.evidence),
                },
                recommended_next_step: NextStep {
                    kind: NextStepKind::Research,
                    suggestion: "Add evidence and validate reach/impact assumptions.".to_string(),
                    success_metric: "Validated improvement in a primary KPI.".to_string(),
                },
            })
            .collect(),
    }
}

fn evidence_gaps(evidence: &str) -> Vec<String> {
    if evidence.trim().is_empty() {
        vec!["No evidence provided.".to_string()]
    } else {
        Vec::new()
    }
}

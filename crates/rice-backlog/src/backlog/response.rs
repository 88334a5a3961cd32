use crate::backlog::domain::{EffortUnit, RankedItem, Timeframe};
use crate::backlog::export::{build_exports, ExportBundle};
use crate::backlog::rationale::{merge_notes, RationaleNotes, MAX_CLARIFYING_QUESTIONS};
use crate::backlog::scoring::{build_summary, sensitivity, SensitivityBands, Summary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response-level metadata echoed back with every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub timeframe: Timeframe,
    pub effort_unit: EffortUnit,
    pub confidence_note: String,
    pub assumptions: Vec<String>,
    pub clarifying_questions: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// A ranked item as it leaves the service: rationale merged in, sensitivity
/// bands attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedItem {
    #[serde(flatten)]
    pub ranked: RankedItem,
    pub sensitivity: SensitivityBands,
}

/// The full structured result of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub meta: ResponseMeta,
    pub items: Vec<AnnotatedItem>,
    pub summary: Summary,
    pub exports: ExportBundle,
}

/// Compose ranked items and provider notes into the outgoing response.
///
/// Summary, exports, and sensitivity are all derived from the merged items;
/// clarifying questions are capped at [`MAX_CLARIFYING_QUESTIONS`].
pub fn assemble_response(
    timeframe: Timeframe,
    effort_unit: EffortUnit,
    ranked: Vec<RankedItem>,
    notes: &RationaleNotes,
) -> ScoreResponse {
    let merged = merge_notes(ranked, notes);
    let summary = build_summary(&merged);
    let exports = build_exports(&merged, timeframe, effort_unit);

    let mut clarifying_questions = notes.meta.clarifying_questions.clone();
    clarifying_questions.truncate(MAX_CLARIFYING_QUESTIONS);

    let items = merged
        .into_iter()
        .map(|ranked| {
            let bands = sensitivity(&ranked);
            AnnotatedItem {
                ranked,
                sensitivity: bands,
            }
        })
        .collect();

    ScoreResponse {
        meta: ResponseMeta {
            timeframe,
            effort_unit,
            confidence_note: notes.meta.confidence_note.clone(),
            assumptions: notes.meta.assumptions.clone(),
            clarifying_questions,
            generated_at: Utc::now(),
        },
        items,
        summary,
        exports,
    }
}

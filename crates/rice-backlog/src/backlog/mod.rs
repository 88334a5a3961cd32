//! RICE backlog prioritization core.
//!
//! Everything in this module is a pure, synchronous derivation: ranking a
//! list of items, perturbing a score for sensitivity analysis, curating the
//! summary lists, merging externally supplied rationale text, and rendering
//! the export bundle. No component retains state between calls, so the core
//! can back a stateless service or be invoked per request.

pub mod domain;
pub mod export;
pub mod rationale;
pub mod response;
pub mod scoring;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    BacklogItem, Computed, EffortUnit, ItemInputs, NextStep, NextStepKind, Rationale, RankedItem,
    ReachEstimate, ReachUnit, Timeframe,
};
pub use export::{build_exports, CsvRow, ExportBundle, ExportError};
pub use rationale::{
    fallback_notes, merge_notes, provider_payload, ItemNotes, NotesMeta, ProviderItem,
    RationaleError, RationaleNotes, RationaleProvider, MAX_CLARIFYING_QUESTIONS,
};
pub use response::{assemble_response, AnnotatedItem, ResponseMeta, ScoreResponse};
pub use scoring::{
    build_summary, rank_items, rice_score, sensitivity, SensitivityBands, Summary,
    HIGH_RISK_MAX_CONFIDENCE, HIGH_RISK_MIN_IMPACT, MIN_EFFORT, QUICK_WIN_MAX_EFFORT,
    QUICK_WIN_MIN_SCORE, SUMMARY_LIST_CAP,
};
pub use validation::{
    validate_output, validate_request, FieldViolation, OutputError, ScoreRequest, ValidationError,
    MAX_ITEMS,
};

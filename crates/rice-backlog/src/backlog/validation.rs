//! Input and output boundary checks.
//!
//! The scorer itself accepts any numbers; what gets validated here is
//! structure: list size, id uniqueness, non-blank identifiers. On the way
//! out, the assembled response is checked once against its own invariants
//! before being returned, mirroring a schema guardrail.

use crate::backlog::domain::{BacklogItem, EffortUnit, Timeframe};
use crate::backlog::response::ScoreResponse;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Hard cap on items per scoring call.
pub const MAX_ITEMS: usize = 10;

/// A scoring request as received at the input boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub timeframe: Timeframe,
    pub effort_unit: EffortUnit,
    pub items: Vec<BacklogItem>,
}

/// One offending field in a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// A single structured rejection listing every offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid score request: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{} ({})", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check the request structure, collecting every violation before failing.
pub fn validate_request(request: &ScoreRequest) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if request.items.is_empty() {
        violations.push(FieldViolation {
            field: "items".to_string(),
            message: "at least one item is required".to_string(),
        });
    }
    if request.items.len() > MAX_ITEMS {
        violations.push(FieldViolation {
            field: "items".to_string(),
            message: format!(
                "at most {MAX_ITEMS} items per call, got {}",
                request.items.len()
            ),
        });
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (index, item) in request.items.iter().enumerate() {
        if item.item_id.trim().is_empty() {
            violations.push(FieldViolation {
                field: format!("items[{index}].itemId"),
                message: "item id must not be blank".to_string(),
            });
        } else if !seen_ids.insert(item.item_id.as_str()) {
            violations.push(FieldViolation {
                field: format!("items[{index}].itemId"),
                message: format!("duplicate item id '{}'", item.item_id),
            });
        }
        if item.title.trim().is_empty() {
            violations.push(FieldViolation {
                field: format!("items[{index}].title"),
                message: "title must not be blank".to_string(),
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// Invariant breach detected in an assembled response.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputError {
    RankSequence { expected: u32, found: u32 },
    DuplicateItemId { item_id: String },
    UnknownSummaryId { list: &'static str, item_id: String },
    RowMismatch { position: usize },
    MarkdownSection { item_id: String },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::RankSequence { expected, found } => {
                write!(f, "ranks must run 1..=N, expected {expected} found {found}")
            }
            OutputError::DuplicateItemId { item_id } => {
                write!(f, "item id '{item_id}' appears more than once")
            }
            OutputError::UnknownSummaryId { list, item_id } => {
                write!(f, "summary list '{list}' references unknown item '{item_id}'")
            }
            OutputError::RowMismatch { position } => {
                write!(f, "export row {position} does not match ranked order")
            }
            OutputError::MarkdownSection { item_id } => {
                write!(
                    f,
                    "markdown export is missing, duplicating, or reordering the section for item '{item_id}'"
                )
            }
        }
    }
}

impl std::error::Error for OutputError {}

/// Post-merge guardrail run once before a response leaves the pipeline.
///
/// Checks that ranks are the exact sequence `1..=N`, ids are unique, every
/// summary id refers to a ranked item, the export rows mirror the ranked
/// order one-to-one, and every item's markdown section appears exactly once
/// in that same order.
pub fn validate_output(response: &ScoreResponse) -> Result<(), OutputError> {
    let mut ids: HashSet<&str> = HashSet::new();
    for (index, entry) in response.items.iter().enumerate() {
        let expected = index as u32 + 1;
        if entry.ranked.computed.rank != expected {
            return Err(OutputError::RankSequence {
                expected,
                found: entry.ranked.computed.rank,
            });
        }
        if !ids.insert(entry.ranked.item.item_id.as_str()) {
            return Err(OutputError::DuplicateItemId {
                item_id: entry.ranked.item.item_id.clone(),
            });
        }
    }

    let summary = &response.summary;
    for (list, members) in [
        ("top3", &summary.top3),
        ("quickWins", &summary.quick_wins),
        ("highRiskHighReward", &summary.high_risk_high_reward),
    ] {
        for item_id in members {
            if !ids.contains(item_id.as_str()) {
                return Err(OutputError::UnknownSummaryId {
                    list,
                    item_id: item_id.clone(),
                });
            }
        }
    }

    if response.exports.csv_rows.len() != response.items.len() {
        return Err(OutputError::RowMismatch {
            position: response.exports.csv_rows.len(),
        });
    }
    for (position, (row, entry)) in response
        .exports
        .csv_rows
        .iter()
        .zip(response.items.iter())
        .enumerate()
    {
        if row.item_id != entry.ranked.item.item_id {
            return Err(OutputError::RowMismatch { position });
        }
    }

    let markdown = response.exports.markdown.as_str();
    let mut cursor = 0;
    for entry in &response.items {
        let heading = format!(
            "### {}. {} (Score:",
            entry.ranked.computed.rank, entry.ranked.item.title
        );
        if markdown.matches(&heading).count() != 1 {
            return Err(OutputError::MarkdownSection {
                item_id: entry.ranked.item.item_id.clone(),
            });
        }
        match markdown[cursor..].find(&heading) {
            Some(position) => cursor += position + heading.len(),
            None => {
                return Err(OutputError::MarkdownSection {
                    item_id: entry.ranked.item.item_id.clone(),
                })
            }
        }
    }

    Ok(())
}

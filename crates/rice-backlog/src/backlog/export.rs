use crate::backlog::domain::{EffortUnit, RankedItem, Timeframe};
use serde::{Deserialize, Serialize};

/// One flat display row per ranked item.
///
/// Every value is already coerced to its display string; consumers must not
/// re-format or re-round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvRow {
    pub item_id: String,
    pub title: String,
    pub reach: String,
    pub impact: String,
    pub confidence: String,
    pub effort: String,
    pub rice_score: String,
    pub rank: String,
    pub note: String,
}

/// Markdown document plus flat rows, both derived from the ranked backlog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub markdown: String,
    pub csv_rows: Vec<CsvRow>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to render csv document: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv document was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ExportBundle {
    /// Render the rows as an RFC 4180 document with a header line.
    pub fn csv_document(&self) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &self.csv_rows {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| ExportError::Csv(csv::Error::from(err.into_error())))?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Render the ranked backlog into the export bundle.
///
/// The markdown layout is load-bearing: downstream consumers paste the
/// document verbatim, so heading levels, bullet markers, and blank-line
/// spacing stay exactly as emitted here.
pub fn build_exports(
    items: &[RankedItem],
    timeframe: Timeframe,
    effort_unit: EffortUnit,
) -> ExportBundle {
    let mut lines: Vec<String> = Vec::new();
    lines.push("# RICE Prioritization Results".to_string());
    lines.push(String::new());
    lines.push(format!("Timeframe: {}", timeframe.label()));
    lines.push(format!("Effort unit: {}", effort_unit.label()));
    lines.push(String::new());
    lines.push("## Ranked Backlog".to_string());
    lines.push(String::new());

    for entry in items {
        let item = &entry.item;
        lines.push(format!(
            "### {}. {} (Score: {})",
            entry.computed.rank, item.title, entry.computed.rice_score
        ));
        if !item.description.is_empty() {
            lines.push(item.description.clone());
        }
        lines.push(String::new());
        lines.push(format!("- Reach: {}", reach_display(entry)));
        lines.push(format!("- Impact: {}", item.inputs.impact));
        lines.push(format!("- Confidence: {}%", item.inputs.confidence));
        lines.push(format!(
            "- Effort: {} {}",
            item.inputs.effort,
            effort_unit.label()
        ));
        lines.push(String::new());
        lines.push(format!("Rationale: {}", entry.rationale.why_this_rank));
        lines.push(format!(
            "Next step: {} - {}",
            entry.recommended_next_step.kind.label(),
            entry.recommended_next_step.suggestion
        ));
        lines.push(format!(
            "Success metric: {}",
            entry.recommended_next_step.success_metric
        ));
        lines.push(String::new());
    }

    let csv_rows = items
        .iter()
        .map(|entry| {
            let item = &entry.item;
            CsvRow {
                item_id: item.item_id.clone(),
                title: item.title.clone(),
                reach: reach_display(entry),
                impact: item.inputs.impact.to_string(),
                confidence: format!("{}%", item.inputs.confidence),
                effort: format!("{} {}", item.inputs.effort, effort_unit.label()),
                rice_score: entry.computed.rice_score.to_string(),
                rank: entry.computed.rank.to_string(),
                note: entry.recommended_next_step.suggestion.clone(),
            }
        })
        .collect();

    ExportBundle {
        markdown: lines.join("\n"),
        csv_rows,
    }
}

fn reach_display(entry: &RankedItem) -> String {
    let reach = &entry.item.inputs.reach;
    format!(
        "{} {}/{}",
        reach.value,
        reach.unit.label(),
        reach.timeframe.label()
    )
}

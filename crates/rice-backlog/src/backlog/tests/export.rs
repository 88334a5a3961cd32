use super::common::{item, worked_examples};
use crate::backlog::domain::{EffortUnit, Timeframe};
use crate::backlog::export::build_exports;
use crate::backlog::rationale::{fallback_notes, merge_notes};
use crate::backlog::scoring::rank_items;

#[test]
fn markdown_layout_is_reproduced_exactly() {
    let ranked = rank_items(worked_examples(), Timeframe::Month);
    let notes = fallback_notes(&ranked);
    let merged = merge_notes(ranked, &notes);

    let bundle = build_exports(&merged, Timeframe::Month, EffortUnit::Days);

    let expected = "\
# RICE Prioritization Results

Timeframe: month
Effort unit: days

## Ranked Backlog

### 1. Item high (Score: 150)

- Reach: 500 users/month
- Impact: 3
- Confidence: 80%
- Effort: 8 days

Rationale: Ranked by deterministic RICE score from the provided inputs.
Next step: research - Add evidence and validate reach/impact assumptions.
Success metric: Validated improvement in a primary KPI.

### 2. Item low (Score: 10)

- Reach: 100 users/month
- Impact: 1
- Confidence: 50%
- Effort: 5 days

Rationale: Ranked by deterministic RICE score from the provided inputs.
Next step: research - Add evidence and validate reach/impact assumptions.
Success metric: Validated improvement in a primary KPI.
";
    assert_eq!(bundle.markdown, expected);
}

#[test]
fn description_line_is_emitted_only_when_present() {
    let mut items = vec![item("desc", 100.0, 1.0, 50.0, 5.0)];
    items[0].description = "Interactive first-run experience.".to_string();

    let ranked = rank_items(items, Timeframe::Week);
    let bundle = build_exports(&ranked, Timeframe::Week, EffortUnit::Points);

    assert!(bundle
        .markdown
        .contains("### 1. Item desc (Score: 10)\nInteractive first-run experience.\n\n- Reach:"));
}

#[test]
fn rows_stringify_without_reformatting() {
    let ranked = rank_items(worked_examples(), Timeframe::Month);
    let notes = fallback_notes(&ranked);
    let merged = merge_notes(ranked, &notes);

    let bundle = build_exports(&merged, Timeframe::Month, EffortUnit::Days);

    assert_eq!(bundle.csv_rows.len(), 2);
    let row = &bundle.csv_rows[0];
    assert_eq!(row.item_id, "high");
    assert_eq!(row.title, "Item high");
    assert_eq!(row.reach, "500 users/month");
    assert_eq!(row.impact, "3");
    assert_eq!(row.confidence, "80%");
    assert_eq!(row.effort, "8 days");
    assert_eq!(row.rice_score, "150");
    assert_eq!(row.rank, "1");
    assert_eq!(
        row.note,
        "Add evidence and validate reach/impact assumptions."
    );
}

#[test]
fn every_item_appears_once_in_both_formats_in_ranked_order() {
    let items = vec![
        item("a", 10.0, 1.0, 50.0, 5.0),
        item("b", 500.0, 3.0, 80.0, 8.0),
        item("c", 200.0, 2.0, 70.0, 4.0),
    ];

    let ranked = rank_items(items, Timeframe::Month);
    let bundle = build_exports(&ranked, Timeframe::Month, EffortUnit::Days);

    let row_ids: Vec<&str> = bundle
        .csv_rows
        .iter()
        .map(|row| row.item_id.as_str())
        .collect();
    let ranked_ids: Vec<&str> = ranked
        .iter()
        .map(|entry| entry.item.item_id.as_str())
        .collect();
    assert_eq!(row_ids, ranked_ids);

    // Section headings appear once per item, in the same order.
    let mut cursor = 0;
    for entry in &ranked {
        let heading = format!(
            "### {}. {} (Score:",
            entry.computed.rank, entry.item.title
        );
        let position = bundle.markdown[cursor..]
            .find(&heading)
            .expect("heading present in ranked order");
        cursor += position + heading.len();
    }
    for entry in &ranked {
        let heading = format!("### {}. {} (Score:", entry.computed.rank, entry.item.title);
        assert_eq!(bundle.markdown.matches(&heading).count(), 1);
    }
}

#[test]
fn csv_document_has_header_and_one_line_per_item() {
    let ranked = rank_items(worked_examples(), Timeframe::Month);
    let bundle = build_exports(&ranked, Timeframe::Month, EffortUnit::Days);

    let document = bundle.csv_document().expect("csv renders");
    let mut lines = document.lines();

    assert_eq!(
        lines.next(),
        Some("itemId,title,reach,impact,confidence,effort,riceScore,rank,note")
    );
    assert_eq!(lines.clone().count(), 2);
    let first = lines.next().expect("first data row");
    assert!(first.starts_with("high,Item high,500 users/month,3,80%,8 days,150,1,"));
}

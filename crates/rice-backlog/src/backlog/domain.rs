use serde::{Deserialize, Serialize};

/// Window over which a reach estimate is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
}

impl Timeframe {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }
}

/// Unit the caller estimates effort in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortUnit {
    Days,
    Points,
}

impl EffortUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Points => "points",
        }
    }
}

/// What a reach count is counted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReachUnit {
    #[default]
    Users,
    Accounts,
    Events,
}

impl ReachUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Accounts => "accounts",
            Self::Events => "events",
        }
    }
}

/// Reach estimate: how many units are affected per timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReachEstimate {
    pub value: f64,
    #[serde(default)]
    pub unit: ReachUnit,
    pub timeframe: Timeframe,
}

/// The four RICE inputs for one backlog item.
///
/// Impact is conventionally 0.25–3 and confidence 0–100, but neither range is
/// enforced here; the scorer clamps what it must and accepts the rest as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemInputs {
    pub reach: ReachEstimate,
    pub impact: f64,
    pub confidence: f64,
    pub effort: f64,
}

/// A user-supplied work item before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogItem {
    pub item_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub evidence: String,
    pub inputs: ItemInputs,
}

/// Score and position assigned by the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Computed {
    pub rice_score: f64,
    pub rank: u32,
}

/// Free-text explanation attached after ranking by an external provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rationale {
    pub why_this_rank: String,
    #[serde(default)]
    pub key_assumptions: Vec<String>,
    #[serde(default)]
    pub evidence_gaps: Vec<String>,
}

/// Category of recommended follow-up action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextStepKind {
    Experiment,
    #[default]
    Research,
    Ship,
    Defer,
}

impl NextStepKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Experiment => "experiment",
            Self::Research => "research",
            Self::Ship => "ship",
            Self::Defer => "defer",
        }
    }
}

/// Recommended follow-up for one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextStep {
    #[serde(rename = "type")]
    pub kind: NextStepKind,
    pub suggestion: String,
    pub success_metric: String,
}

/// A backlog item after scoring and ranking, with rationale placeholders.
///
/// Rationale and next-step start empty and are filled by
/// [`merge_notes`](crate::backlog::rationale::merge_notes); attaching text
/// never alters the computed score or rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedItem {
    #[serde(flatten)]
    pub item: BacklogItem,
    pub computed: Computed,
    pub rationale: Rationale,
    pub recommended_next_step: NextStep,
}

//! Deterministic scoring: the RICE formula, ranking, single-factor
//! sensitivity bands, and the curated summary lists.

mod rank;
mod score;
mod sensitivity;
mod summary;

pub use rank::rank_items;
pub use score::{rice_score, MIN_EFFORT};
pub use sensitivity::{sensitivity, SensitivityBands};
pub use summary::{
    build_summary, Summary, HIGH_RISK_MAX_CONFIDENCE, HIGH_RISK_MIN_IMPACT, QUICK_WIN_MAX_EFFORT,
    QUICK_WIN_MIN_SCORE, SUMMARY_LIST_CAP,
};

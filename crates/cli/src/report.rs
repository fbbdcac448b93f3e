//! Planning run and its JSON report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use restock_replenishment::{
    plan, within_lookback, ReorderPolicy, ReorderSuggestion, ReorderSummary,
};

use crate::input::PlanningInput;

/// What the command prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    /// End of the lookback window; `None` when windowing was disabled.
    pub as_of: Option<DateTime<Utc>>,
    pub policy: ReorderPolicy,
    pub summary: ReorderSummary,
    pub suggestions: Vec<ReorderSuggestion>,
}

/// Window the movements (when `as_of` is set) and plan reorders.
pub fn build_report(
    input: &PlanningInput,
    policy: ReorderPolicy,
    as_of: Option<DateTime<Utc>>,
) -> PlanReport {
    let suggestions = match as_of {
        Some(end) => {
            let windowed = within_lookback(&input.movements, end, &policy);
            info!(
                total = input.movements.len(),
                in_window = windowed.len(),
                as_of = %end,
                "applied lookback window"
            );
            plan(&input.items, &windowed, &policy)
        }
        None => plan(&input.items, &input.movements, &policy),
    };

    let summary = ReorderSummary::from_suggestions(&suggestions);
    info!(
        items = input.items.len(),
        suggestions = summary.total,
        critical = summary.critical,
        high = summary.high,
        medium = summary.medium,
        "reorder plan ready"
    );

    PlanReport {
        as_of,
        policy,
        summary,
        suggestions,
    }
}

use serde::{Deserialize, Serialize};

use crate::planner::{ReorderSuggestion, Urgency};

/// Headline counts for a suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReorderSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub ok: usize,
}

impl ReorderSummary {
    pub fn from_suggestions(suggestions: &[ReorderSuggestion]) -> Self {
        suggestions.iter().fold(Self::default(), |mut acc, s| {
            acc.total += 1;
            match s.urgency {
                Urgency::Critical => acc.critical += 1,
                Urgency::High => acc.high += 1,
                Urgency::Medium => acc.medium += 1,
                Urgency::Ok => acc.ok += 1,
            }
            acc
        })
    }
}

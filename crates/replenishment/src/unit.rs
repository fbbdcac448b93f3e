//! Unit-of-measure classification.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::numeric::{ceil_to, is_positive_finite};

/// Piece-like unit labels, compared after trimming and lower-casing.
static DISCRETE_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "pcs", "stk", "stk.", "piece", "pieces", "unit", "stueck", "stück",
    ]
    .into_iter()
    .collect()
});

/// Whether an item is stocked in whole units or in measurable amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Only whole numbers can be ordered (pieces).
    Discrete,
    /// Weight, volume, length... ordered to two decimals.
    Continuous,
}

impl UnitKind {
    /// Classify a free-text unit label. A missing label is continuous.
    pub fn classify(unit: Option<&str>) -> Self {
        match unit {
            Some(label) if DISCRETE_UNITS.contains(label.trim().to_lowercase().as_str()) => {
                UnitKind::Discrete
            }
            _ => UnitKind::Continuous,
        }
    }

    /// Normalize a raw reorder quantity for this kind of unit.
    ///
    /// Discrete quantities round up to the next whole unit, continuous ones
    /// up to the next hundredth. Non-finite or non-positive input yields `0`.
    pub fn normalize(self, raw: f64) -> f64 {
        if !is_positive_finite(raw) {
            return 0.0;
        }
        let qty = match self {
            UnitKind::Discrete => raw.ceil(),
            UnitKind::Continuous => ceil_to(raw, 2),
        };
        if is_positive_finite(qty) { qty } else { 0.0 }
    }
}

//! Demand aggregation.
//!
//! Reduces stock movements into per-item demand statistics. Sales count as
//! consumption; returns and cancellations reverse it. Everything else
//! (receipts, stocktake corrections, ...) is ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use restock_core::{ItemId, ValueObject};

use crate::movement::{ReasonCode, StockMovement};
use crate::numeric::{is_positive_finite, round_to};

/// Net consumption of one item over the lookback window.
///
/// All quantities are rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DemandStats {
    pub sold_qty: f64,
    pub reversed_qty: f64,
    /// `max(0, sold_qty - reversed_qty)`; never negative.
    pub net_demand_qty: f64,
}

impl ValueObject for DemandStats {}

/// Immutable lookup of demand statistics by item.
///
/// Items without any relevant movement are absent; [`DemandIndex::stats_for`]
/// reports zero demand for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemandIndex {
    stats: BTreeMap<ItemId, DemandStats>,
}

impl DemandIndex {
    pub fn get(&self, item_id: &ItemId) -> Option<&DemandStats> {
        self.stats.get(item_id)
    }

    /// Stats for `item_id`, or all-zero stats when it never moved.
    pub fn stats_for(&self, item_id: &ItemId) -> DemandStats {
        self.get(item_id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate in item id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &DemandStats)> {
        self.stats.iter()
    }
}

impl<'a> IntoIterator for &'a DemandIndex {
    type Item = (&'a ItemId, &'a DemandStats);
    type IntoIter = std::collections::btree_map::Iter<'a, ItemId, DemandStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.stats.iter()
    }
}

#[derive(Default)]
struct Totals {
    sold: f64,
    reversed: f64,
}

/// Aggregate movements into per-item demand statistics.
///
/// Movements are skipped when they carry no item, a quantity that is not a
/// finite positive number, or a reason other than sale/return/cancel.
pub fn aggregate<'a, I>(movements: I) -> DemandIndex
where
    I: IntoIterator<Item = &'a StockMovement>,
{
    let mut totals: BTreeMap<ItemId, Totals> = BTreeMap::new();
    let mut accepted = 0usize;
    let mut skipped = 0usize;

    for movement in movements {
        let Some(item_id) = movement.item_id.as_ref() else {
            trace!("skipping movement without item_id");
            skipped += 1;
            continue;
        };
        let qty = match movement.quantity {
            Some(q) if is_positive_finite(q) => q,
            other => {
                trace!(item_id = %item_id, qty = ?other, "skipping movement with unusable quantity");
                skipped += 1;
                continue;
            }
        };

        match movement.reason_code {
            ReasonCode::Sale => totals.entry(item_id.clone()).or_default().sold += qty,
            ReasonCode::Return | ReasonCode::Cancel => {
                totals.entry(item_id.clone()).or_default().reversed += qty
            }
            ReasonCode::Other => {
                trace!(item_id = %item_id, "skipping movement without demand effect");
                skipped += 1;
                continue;
            }
        }
        accepted += 1;
    }

    let stats: BTreeMap<ItemId, DemandStats> = totals
        .into_iter()
        .map(|(item_id, t)| {
            let net = (t.sold - t.reversed).max(0.0);
            let stats = DemandStats {
                sold_qty: round_to(t.sold, 2),
                reversed_qty: round_to(t.reversed, 2),
                net_demand_qty: round_to(net, 2),
            };
            (item_id, stats)
        })
        .collect();

    debug!(
        accepted,
        skipped,
        items = stats.len(),
        "aggregated stock movements into demand"
    );

    DemandIndex { stats }
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace};

use restock_core::ItemId;

use crate::demand::{aggregate, DemandIndex};
use crate::item::ItemSnapshot;
use crate::movement::StockMovement;
use crate::numeric::{is_positive_finite, round_to};
use crate::policy::ReorderPolicy;

/// How soon an item needs to be reordered.
///
/// Variants are declared from least to most urgent, so the derived `Ord`
/// follows [`Urgency::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Ok,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn rank(self) -> u8 {
        match self {
            Urgency::Ok => 0,
            Urgency::Medium => 1,
            Urgency::High => 2,
            Urgency::Critical => 3,
        }
    }

    /// Classify an item from its normalized reorder quantity.
    ///
    /// Precedence: nothing to order is `Ok`; no stock on hand is `Critical`
    /// whatever the demand; no measurable demand is `Medium`; stock that runs
    /// out within the lead time is `High`; anything else `Medium`.
    pub fn classify(
        reorder_qty: f64,
        current_stock: f64,
        avg_daily_demand: f64,
        lead_time_days: f64,
    ) -> Self {
        if !is_positive_finite(reorder_qty) {
            return Urgency::Ok;
        }
        if current_stock <= 0.0 {
            return Urgency::Critical;
        }
        if !is_positive_finite(avg_daily_demand) {
            return Urgency::Medium;
        }
        if current_stock / avg_daily_demand <= lead_time_days {
            Urgency::High
        } else {
            Urgency::Medium
        }
    }
}

/// Reorder recommendation for one item.
///
/// Carries the item's own fields plus the demand figures that led to the
/// recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderSuggestion {
    pub id: ItemId,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub current_stock: f64,
    #[serde(flatten)]
    pub attributes: Map<String, JsonValue>,
    pub sold_qty: f64,
    pub reversed_qty: f64,
    pub net_demand_qty: f64,
    pub avg_daily_demand: f64,
    pub target_stock: f64,
    /// Normalized order quantity; always finite and positive.
    pub reorder_qty: f64,
    /// Days the current stock lasts at the average rate, one decimal.
    /// `None` without demand or without stock.
    pub coverage_days: Option<f64>,
    pub urgency: Urgency,
}

/// Field names of [`ReorderSuggestion`]; carried-through item columns with
/// these names are dropped so the flattened JSON keeps unique keys.
const SUGGESTION_FIELDS: &[&str] = &[
    "id",
    "name",
    "unit",
    "current_stock",
    "sold_qty",
    "reversed_qty",
    "net_demand_qty",
    "avg_daily_demand",
    "target_stock",
    "reorder_qty",
    "coverage_days",
    "urgency",
];

/// Plan reorders from raw movement history.
///
/// Aggregates `movements` and delegates to [`plan_with_demand`].
pub fn plan<'a, 'm, I, M>(items: I, movements: M, policy: &ReorderPolicy) -> Vec<ReorderSuggestion>
where
    I: IntoIterator<Item = &'a ItemSnapshot>,
    M: IntoIterator<Item = &'m StockMovement>,
{
    let demand = aggregate(movements);
    plan_with_demand(items, &demand, policy)
}

/// Plan reorders against precomputed demand.
///
/// Items without an id and items that need nothing are left out. The result
/// is ordered by urgency (most urgent first), then by reorder quantity
/// (largest first), then by name.
pub fn plan_with_demand<'a, I>(
    items: I,
    demand: &DemandIndex,
    policy: &ReorderPolicy,
) -> Vec<ReorderSuggestion>
where
    I: IntoIterator<Item = &'a ItemSnapshot>,
{
    let mut considered = 0usize;
    let mut suggestions: Vec<ReorderSuggestion> = items
        .into_iter()
        .filter_map(|item| {
            let Some(id) = item.id.as_ref() else {
                trace!(name = ?item.name, "skipping item without id");
                return None;
            };
            considered += 1;
            suggest(id, item, demand, policy)
        })
        .collect();

    suggestions.sort_by(compare_suggestions);

    debug!(
        considered,
        suggested = suggestions.len(),
        lookback_days = policy.lookback_days(),
        lead_time_days = policy.lead_time_days(),
        safety_days = policy.safety_days(),
        "planned reorder suggestions"
    );

    suggestions
}

fn suggest(
    id: &ItemId,
    item: &ItemSnapshot,
    demand: &DemandIndex,
    policy: &ReorderPolicy,
) -> Option<ReorderSuggestion> {
    let stats = demand.stats_for(id);
    let current_stock = item.stock_level();

    let avg_daily_demand = stats.net_demand_qty / policy.lookback_days();
    let target_stock = avg_daily_demand * policy.coverage_horizon_days();
    let reorder_qty = item.unit_kind().normalize(target_stock - current_stock);

    if !is_positive_finite(reorder_qty) {
        trace!(item_id = %id, target_stock, current_stock, "stock covers target; no reorder");
        return None;
    }

    let coverage_days = (is_positive_finite(avg_daily_demand) && current_stock > 0.0)
        .then(|| round_to(current_stock / avg_daily_demand, 1));
    let urgency = Urgency::classify(
        reorder_qty,
        current_stock,
        avg_daily_demand,
        policy.lead_time_days(),
    );

    Some(ReorderSuggestion {
        id: id.clone(),
        name: item.name.clone(),
        unit: item.unit.clone(),
        current_stock,
        attributes: carried_attributes(id, &item.attributes),
        sold_qty: stats.sold_qty,
        reversed_qty: stats.reversed_qty,
        net_demand_qty: stats.net_demand_qty,
        avg_daily_demand,
        target_stock,
        reorder_qty,
        coverage_days,
        urgency,
    })
}

fn carried_attributes(id: &ItemId, attributes: &Map<String, JsonValue>) -> Map<String, JsonValue> {
    attributes
        .iter()
        .filter(|(key, _)| {
            let reserved = SUGGESTION_FIELDS.contains(&key.as_str());
            if reserved {
                trace!(item_id = %id, column = %key, "dropping item column shadowed by suggestion field");
            }
            !reserved
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn compare_suggestions(a: &ReorderSuggestion, b: &ReorderSuggestion) -> Ordering {
    b.urgency
        .rank()
        .cmp(&a.urgency.rank())
        .then_with(|| b.reorder_qty.total_cmp(&a.reorder_qty))
        .then_with(|| {
            let a_name = a.name.as_deref().unwrap_or("");
            let b_name = b.name.as_deref().unwrap_or("");
            a_name.cmp(b_name)
        })
}

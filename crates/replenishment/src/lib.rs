//! Replenishment domain module.
//!
//! Turns raw stock-movement history and item snapshots into ranked reorder
//! suggestions. Everything here is deterministic domain logic: no IO, no
//! storage, no clocks. Callers fetch the records and decide what to do with
//! the result.
//!
//! Pipeline:
//! - [`aggregate`] reduces movements into per-item [`DemandStats`].
//! - [`plan`] combines item snapshots, demand and a [`ReorderPolicy`] into
//!   an ordered list of [`ReorderSuggestion`]s.

mod lenient;

pub mod demand;
pub mod item;
pub mod movement;
pub mod numeric;
pub mod planner;
pub mod policy;
pub mod summary;
pub mod unit;

pub use demand::{aggregate, DemandIndex, DemandStats};
pub use item::ItemSnapshot;
pub use movement::{within_lookback, ReasonCode, StockMovement};
pub use planner::{plan, plan_with_demand, ReorderSuggestion, Urgency};
pub use policy::ReorderPolicy;
pub use summary::ReorderSummary;
pub use unit::UnitKind;

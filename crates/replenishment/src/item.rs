use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use restock_core::ItemId;

use crate::lenient;
use crate::unit::UnitKind;

/// Inventory item as read from the item table.
///
/// Only `id`, `current_stock`, `unit` and `name` drive planning. Any other
/// column (sku, supplier, price, ...) lands in `attributes` and is carried
/// through to the suggestion, except columns named like a suggestion field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemSnapshot {
    #[serde(default, deserialize_with = "lenient::identifier")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub current_stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, JsonValue>,
}

impl ItemSnapshot {
    pub fn new(id: ItemId, name: impl Into<String>, current_stock: f64) -> Self {
        Self {
            id: Some(id),
            current_stock: Some(current_stock),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Stock on hand; negative means backorder. Missing or non-finite reads as zero.
    pub fn stock_level(&self) -> f64 {
        match self.current_stock {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }

    pub fn unit_kind(&self) -> UnitKind {
        UnitKind::classify(self.unit.as_deref())
    }
}

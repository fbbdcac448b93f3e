//! Input document parsing.

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use restock_replenishment::{ItemSnapshot, StockMovement};

/// Rows exported from the item and stock-movement tables.
///
/// Both arrays are optional; a missing array is empty. Individual rows are
/// decoded leniently and bad rows are skipped later by the planner, but a
/// document that is not an object of arrays is rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlanningInput {
    #[serde(default)]
    pub items: Vec<ItemSnapshot>,
    #[serde(default)]
    pub movements: Vec<StockMovement>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed input document: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanningInput {
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_and_movements() {
        let input = PlanningInput::from_reader(
            r#"{
                "items": [{"id": "i1", "name": "Bolt", "unit": "pcs", "current_stock": 5}],
                "movements": [{"item_id": "i1", "qty": 30, "reason_code": "sale"}]
            }"#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(input.items.len(), 1);
        assert_eq!(input.movements.len(), 1);
    }

    #[test]
    fn missing_arrays_are_empty() {
        assert_eq!(PlanningInput::from_json("{}").unwrap(), PlanningInput::default());
    }

    #[test]
    fn non_object_document_is_rejected() {
        match PlanningInput::from_json("[1, 2, 3]") {
            Err(InputError::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
        assert!(PlanningInput::from_json("{\"items\": 3}").is_err());
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use restock_core::ItemId;

use crate::lenient;
use crate::policy::ReorderPolicy;

/// Why stock moved, classified once on ingestion.
///
/// Only sales and their reversals say anything about demand. Receipts,
/// stocktake corrections and every other code fall into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonCode {
    Sale,
    Return,
    Cancel,
    #[default]
    Other,
}

impl ReasonCode {
    /// Case-insensitive classification of a raw reason code.
    pub fn classify(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "sale" => ReasonCode::Sale,
            "return" => ReasonCode::Return,
            "cancel" => ReasonCode::Cancel,
            _ => ReasonCode::Other,
        }
    }
}

impl From<&str> for ReasonCode {
    fn from(value: &str) -> Self {
        Self::classify(value)
    }
}

impl<'de> Deserialize<'de> for ReasonCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<JsonValue>::deserialize(deserializer)? {
            Some(JsonValue::String(raw)) => ReasonCode::classify(&raw),
            _ => ReasonCode::Other,
        })
    }
}

/// A single stock movement as recorded by the order lifecycle.
///
/// Fields are optional because the upstream feed is not trusted: a record
/// without an item or with an unusable quantity is carried as-is and skipped
/// during aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockMovement {
    #[serde(default, deserialize_with = "lenient::identifier")]
    pub item_id: Option<ItemId>,
    #[serde(rename = "qty", default, deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub reason_code: ReasonCode,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl StockMovement {
    pub fn new(item_id: ItemId, reason_code: ReasonCode, quantity: f64) -> Self {
        Self {
            item_id: Some(item_id),
            quantity: Some(quantity),
            reason_code,
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Upper bound for the window span; keeps absurd lookbacks from overflowing
/// the duration type (roughly 31,000 years).
const MAX_WINDOW_MS: f64 = 1e15;

/// Keep movements recorded within `policy.lookback_days()` before `as_of`.
///
/// Movements dated after `as_of` are dropped. Movements without a timestamp
/// are kept: the feed that produced them is assumed to have windowed already.
pub fn within_lookback(
    movements: &[StockMovement],
    as_of: DateTime<Utc>,
    policy: &ReorderPolicy,
) -> Vec<StockMovement> {
    let span_ms = (policy.lookback_days() * 86_400_000.0).min(MAX_WINDOW_MS);
    let cutoff = as_of.checked_sub_signed(Duration::milliseconds(span_ms as i64));

    movements
        .iter()
        .filter(|m| match m.created_at {
            None => true,
            Some(ts) => ts <= as_of && cutoff.is_none_or(|c| ts >= c),
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(raw: &str) -> ItemId {
        ItemId::parse(raw).unwrap()
    }

    #[test]
    fn reason_codes_are_case_insensitive() {
        assert_eq!(ReasonCode::classify("SALE"), ReasonCode::Sale);
        assert_eq!(ReasonCode::classify("Return"), ReasonCode::Return);
        assert_eq!(ReasonCode::classify("cAnCeL"), ReasonCode::Cancel);
        assert_eq!(ReasonCode::classify("adjustment"), ReasonCode::Other);
        assert_eq!(ReasonCode::classify("purchase_receipt"), ReasonCode::Other);
    }

    #[test]
    fn deserializes_upstream_record_shape() {
        let m: StockMovement = serde_json::from_value(serde_json::json!({
            "id": 991,
            "item_id": "i1",
            "qty": "12.5",
            "reason_code": "Sale",
            "created_at": "2024-05-01T10:00:00+00:00",
            "note": "ignored"
        }))
        .unwrap();

        assert_eq!(m.item_id, Some(item("i1")));
        assert_eq!(m.quantity, Some(12.5));
        assert_eq!(m.reason_code, ReasonCode::Sale);
        assert!(m.created_at.is_some());
    }

    #[test]
    fn malformed_fields_decode_to_absent_values() {
        let m: StockMovement = serde_json::from_value(serde_json::json!({
            "item_id": "   ",
            "qty": "lots",
            "reason_code": 7,
            "created_at": 1714557600
        }))
        .unwrap();

        assert_eq!(m, StockMovement::default());
    }

    #[test]
    fn lookback_keeps_window_and_undated_movements() {
        let as_of = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let policy = ReorderPolicy::default();

        let inside = StockMovement::new(item("a"), ReasonCode::Sale, 1.0)
            .with_created_at(as_of - Duration::days(29));
        let edge = StockMovement::new(item("b"), ReasonCode::Sale, 1.0)
            .with_created_at(as_of - Duration::days(30));
        let outside = StockMovement::new(item("c"), ReasonCode::Sale, 1.0)
            .with_created_at(as_of - Duration::days(31));
        let future = StockMovement::new(item("d"), ReasonCode::Sale, 1.0)
            .with_created_at(as_of + Duration::hours(1));
        let undated = StockMovement::new(item("e"), ReasonCode::Sale, 1.0);

        let kept = within_lookback(
            &[inside.clone(), edge.clone(), outside, future, undated.clone()],
            as_of,
            &policy,
        );
        assert_eq!(kept, vec![inside, edge, undated]);
    }

    #[test]
    fn huge_lookback_keeps_everything_in_the_past() {
        let as_of = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        let policy = ReorderPolicy::default().with_lookback_days(1e300);
        let ancient = StockMovement::new(item("a"), ReasonCode::Sale, 1.0)
            .with_created_at(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(within_lookback(&[ancient.clone()], as_of, &policy), vec![ancient]);
    }
}

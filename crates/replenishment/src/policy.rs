use serde::{Deserialize, Serialize};

use restock_core::ValueObject;

use crate::numeric::is_positive_finite;

pub const DEFAULT_LOOKBACK_DAYS: f64 = 30.0;
pub const DEFAULT_LEAD_TIME_DAYS: f64 = 14.0;
pub const DEFAULT_SAFETY_DAYS: f64 = 7.0;

/// Replenishment policy parameters, all measured in days.
///
/// Every parameter must be a finite positive number. Anything else is
/// silently replaced by its default, so a policy can always be built and
/// planning never fails on configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPolicy")]
pub struct ReorderPolicy {
    lookback_days: f64,
    lead_time_days: f64,
    safety_days: f64,
}

impl ValueObject for ReorderPolicy {}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            lead_time_days: DEFAULT_LEAD_TIME_DAYS,
            safety_days: DEFAULT_SAFETY_DAYS,
        }
    }
}

impl ReorderPolicy {
    pub fn new(lookback_days: f64, lead_time_days: f64, safety_days: f64) -> Self {
        Self::default()
            .with_lookback_days(lookback_days)
            .with_lead_time_days(lead_time_days)
            .with_safety_days(safety_days)
    }

    /// Trailing period over which demand is averaged.
    pub fn with_lookback_days(mut self, days: f64) -> Self {
        self.lookback_days = or_default(days, DEFAULT_LOOKBACK_DAYS);
        self
    }

    /// Days between placing an order and the stock arriving.
    pub fn with_lead_time_days(mut self, days: f64) -> Self {
        self.lead_time_days = or_default(days, DEFAULT_LEAD_TIME_DAYS);
        self
    }

    /// Extra coverage beyond the lead time.
    pub fn with_safety_days(mut self, days: f64) -> Self {
        self.safety_days = or_default(days, DEFAULT_SAFETY_DAYS);
        self
    }

    pub fn lookback_days(&self) -> f64 {
        self.lookback_days
    }

    pub fn lead_time_days(&self) -> f64 {
        self.lead_time_days
    }

    pub fn safety_days(&self) -> f64 {
        self.safety_days
    }

    /// Days of demand the target stock level has to cover.
    pub fn coverage_horizon_days(&self) -> f64 {
        self.lead_time_days + self.safety_days
    }

    /// Whether `days` would be accepted as-is by the `with_*` builders.
    pub fn accepts(days: f64) -> bool {
        is_positive_finite(days)
    }
}

fn or_default(days: f64, default: f64) -> f64 {
    if is_positive_finite(days) { days } else { default }
}

/// Wire shape: every field optional, sanitized on the way in.
#[derive(Deserialize)]
struct RawPolicy {
    lookback_days: Option<f64>,
    lead_time_days: Option<f64>,
    safety_days: Option<f64>,
}

impl From<RawPolicy> for ReorderPolicy {
    fn from(raw: RawPolicy) -> Self {
        let nan = f64::NAN;
        ReorderPolicy::new(
            raw.lookback_days.unwrap_or(nan),
            raw.lead_time_days.unwrap_or(nan),
            raw.safety_days.unwrap_or(nan),
        )
    }
}

//! Command-line and environment configuration.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use tracing::warn;

use restock_replenishment::policy::{
    DEFAULT_LEAD_TIME_DAYS, DEFAULT_LOOKBACK_DAYS, DEFAULT_SAFETY_DAYS,
};
use restock_replenishment::ReorderPolicy;

/// Compute reorder suggestions from item and stock-movement exports.
#[derive(Debug, Clone, Parser)]
#[command(name = "restock", version)]
pub struct Cli {
    /// Input document `{"items": [...], "movements": [...]}`; stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Trailing days of movements used to estimate demand.
    #[arg(long, env = "RESTOCK_LOOKBACK_DAYS", default_value_t = DEFAULT_LOOKBACK_DAYS, allow_negative_numbers = true)]
    pub lookback_days: f64,

    /// Days between ordering and receiving stock.
    #[arg(long, env = "RESTOCK_LEAD_TIME_DAYS", default_value_t = DEFAULT_LEAD_TIME_DAYS, allow_negative_numbers = true)]
    pub lead_time_days: f64,

    /// Extra days of cover on top of the lead time.
    #[arg(long, env = "RESTOCK_SAFETY_DAYS", default_value_t = DEFAULT_SAFETY_DAYS, allow_negative_numbers = true)]
    pub safety_days: f64,

    /// Reference time for the lookback window (RFC 3339); defaults to now.
    #[arg(long, conflicts_with = "no_window")]
    pub as_of: Option<DateTime<Utc>>,

    /// Use every movement in the input regardless of its timestamp.
    #[arg(long)]
    pub no_window: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Policy from the configured parameters.
    ///
    /// Parameters that are not finite positive numbers are reported and
    /// replaced by their defaults.
    pub fn policy(&self) -> ReorderPolicy {
        for (name, value, default) in [
            ("lookback_days", self.lookback_days, DEFAULT_LOOKBACK_DAYS),
            ("lead_time_days", self.lead_time_days, DEFAULT_LEAD_TIME_DAYS),
            ("safety_days", self.safety_days, DEFAULT_SAFETY_DAYS),
        ] {
            if !ReorderPolicy::accepts(value) {
                warn!(parameter = name, value, default, "invalid policy parameter; using default");
            }
        }
        ReorderPolicy::new(self.lookback_days, self.lead_time_days, self.safety_days)
    }

    /// Reference time for windowing, or `None` when windowing is disabled.
    pub fn window_end(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.no_window {
            None
        } else {
            Some(self.as_of.unwrap_or(now))
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

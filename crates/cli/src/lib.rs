//! `restock` command-line front end.
//!
//! Reads an export of item and stock-movement rows, windows the movements,
//! runs the replenishment planner and renders a JSON report.

pub mod config;
pub mod input;
pub mod report;

pub use config::Cli;
pub use input::{InputError, PlanningInput};
pub use report::{build_report, PlanReport};

//! Rugby league kick explorer.
//!
//! Filters a table of recorded kicks by team, player, kick type and outcome,
//! field position, game time and tackle, joined against a fixtures table for
//! round, venue, ground and weather.

pub mod config;
pub mod data;
pub mod report;

pub use config::Config;
pub use data::filter::{FilterError, FilterSpec, InclusiveRange, Selection};
pub use data::store::{DatasetStore, FilterOutcome};

//! # planet_core - Weighted planet condition selection
//!
//! Rolls how many planet conditions a Dome Keeper session gets and which ones,
//! using weighted probability tables.
//!
//! ## Features
//! - Generic weighted table (integer or float weights, any hashable item)
//! - Weighted sampling without replacement for distinct draws
//! - Injectable RNG (same seed = same result)
//! - Frequency self-test against theoretical probabilities

pub mod condition;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod report;
pub mod selection;
pub mod table;
pub mod tables;

pub use condition::PlanetCondition;
pub use config::SessionConfig;
pub use diagnostics::{sample_frequencies, FrequencyEntry, FrequencyReport};
pub use error::{ConfigError, DiagnosticError, Result, TableError};
pub use report::{render_selection, selection_json, Banner};
pub use selection::{select_conditions, ConditionSelection, ConditionSelector};
pub use table::{Weight, WeightedTable};
pub use tables::{AmountsTable, ConditionsTable, AMOUNTS, PLANET_CONDITIONS};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

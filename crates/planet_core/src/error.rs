use rand::distributions::WeightedError;
use thiserror::Error;

/// Weighted table errors. All of them are configuration mistakes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Invalid table: {reason}")]
    InvalidTable { reason: String },

    #[error("Insufficient items: requested {requested}, table holds {available}")]
    InsufficientItems { requested: usize, available: usize },

    #[error("Invalid weight {weight} for item {item}")]
    InvalidWeight { item: String, weight: String },

    #[error("Duplicate item: {item}")]
    DuplicateItem { item: String },
}

impl TableError {
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        TableError::InvalidTable { reason: reason.into() }
    }

    /// Nothing here is transient, so retrying never helps.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}

impl From<WeightedError> for TableError {
    fn from(err: WeightedError) -> Self {
        match err {
            WeightedError::NoItem => TableError::invalid_table("table has no entries"),
            WeightedError::AllWeightsZero => TableError::invalid_table("total weight is zero"),
            WeightedError::InvalidWeight => {
                TableError::invalid_table("table holds a negative or NaN weight")
            }
            WeightedError::TooMany => TableError::invalid_table("table holds too many entries"),
        }
    }
}

/// Self-test failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticError {
    #[error("Self-test needs at least one trial")]
    NoTrials,

    #[error("Percentages sum to {sum:.4}, expected 100")]
    PercentSum { sum: f64 },

    #[error(
        "Item {item} observed at {observed:.2}%, expected {expected:.2}% (tolerance {tolerance} pp)"
    )]
    Deviation { item: String, observed: f64, expected: f64, tolerance: f64 },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Session configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Trial count must be positive")]
    ZeroTrials,

    #[error("Tolerance must be a positive, finite number of percentage points: {0}")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, TableError>;

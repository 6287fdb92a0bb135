//! Error types for tank validation and store operations.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for tank operations
pub type TankResult<T> = Result<T, TankError>;

/// Errors reported by the validator and the store.
///
/// Every error is terminal for the operation that detected it: the store is
/// never mutated once a check has failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TankError {
    /// Current volume exceeds tank capacity
    #[error("Current volume ({volume}) cannot exceed capacity ({capacity})")]
    InvalidVolume { volume: f64, capacity: f64 },

    /// Last refill date lies in the future
    #[error("Last refill date ({date}) cannot be in the future")]
    FutureDate { date: NaiveDate },

    /// A tank with this id already exists in the store
    #[error("Tank with ID {0} already exists")]
    DuplicateId(u64),

    /// No tank with this id exists in the store
    #[error("Tank with ID {0} not found")]
    NotFound(u64),
}

impl TankError {
    /// True for the field-level validation failures, as opposed to the
    /// store-level uniqueness and lookup failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TankError::InvalidVolume { .. } | TankError::FutureDate { .. }
        )
    }
}

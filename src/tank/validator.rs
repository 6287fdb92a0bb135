//! Field-level validation for candidate tank records.
//!
//! Validation is explicit and pure: constructing a `Tank` never runs these
//! checks, the store invokes them before accepting a candidate. Id uniqueness
//! is not checked here since it depends on the store's current contents.

use chrono::{Local, NaiveDate};

use super::errors::{TankError, TankResult};
use super::model::Tank;

/// Validates a candidate tank against a fixed "today".
///
/// Checks, in order:
/// 1. `current_volume <= capacity`, failing with `InvalidVolume`
/// 2. `last_refill_date <= today`, failing with `FutureDate`
///
/// Deterministic: same candidate and same `today` always produce the same
/// outcome. No side effects, no mutation.
pub fn validate_at(tank: &Tank, today: NaiveDate) -> TankResult<()> {
    if tank.current_volume > tank.capacity {
        return Err(TankError::InvalidVolume {
            volume: tank.current_volume,
            capacity: tank.capacity,
        });
    }

    if tank.last_refill_date > today {
        return Err(TankError::FutureDate {
            date: tank.last_refill_date,
        });
    }

    Ok(())
}

/// Validates a candidate tank against the wall-clock date.
///
/// Tests should prefer [`validate_at`] with a fixed date.
pub fn validate(tank: &Tank) -> TankResult<()> {
    validate_at(tank, Local::now().date_naive())
}

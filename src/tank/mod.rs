//! Tank records, validation, and the in-memory store.
//!
//! The store owns all tank records and enforces id uniqueness; field-level
//! business rules live in the validator as a pure function invoked before a
//! candidate is accepted.
//!
//! # Invariants Enforced
//!
//! - Id uniqueness across the store's current contents
//! - `current_volume <= capacity`
//! - `last_refill_date` never in the future
//! - No partial mutation: a failed check leaves the store untouched

mod errors;
mod model;
mod store;
mod validator;

pub use errors::{TankError, TankResult};
pub use model::{FuelType, Tank};
pub use store::TankStore;
pub use validator::{validate, validate_at};

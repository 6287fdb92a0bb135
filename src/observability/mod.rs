//! Structured logging for tankdb.
//!
//! Logging is synchronous and side-effect free with respect to the store:
//! a logging failure must never fail the operation being logged.

mod logger;

pub use logger::{Logger, Severity};

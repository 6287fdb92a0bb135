//! tankdb - A validated in-memory fuel tank registry
//!
//! Records are held in an ordered in-memory store keyed by a unique integer
//! id; every create and full replace runs field validation before the store
//! is touched. The HTTP layer maps the store's five operations onto routes
//! and owns all serialization and status-code concerns.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod tank;

//! Tank record and fuel grade types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fuel grades a tank may hold.
///
/// This is a closed set: unrecognized grade strings are rejected at
/// deserialization, before any record reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "AI-92")]
    Ai92,
    #[serde(rename = "AI-95")]
    Ai95,
    #[serde(rename = "AI-98")]
    Ai98,
    #[serde(rename = "Diesel")]
    Diesel,
}

impl FuelType {
    /// Returns the grade label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Ai92 => "AI-92",
            FuelType::Ai95 => "AI-95",
            FuelType::Ai98 => "AI-98",
            FuelType::Diesel => "Diesel",
        }
    }
}

/// A fuel storage tank record.
///
/// `id` is externally assigned; the store enforces its uniqueness.
/// Constructing a `Tank` in memory never runs business rules; validation
/// happens explicitly via [`validate`](crate::tank::validate) when the
/// store accepts a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub id: u64,
    pub fuel_type: FuelType,
    /// Maximum volume the tank can hold. Positive.
    pub capacity: f64,
    /// Current fill level. Must stay within `0 ..= capacity`.
    pub current_volume: f64,
    /// Date of the most recent refill. Never in the future.
    pub last_refill_date: NaiveDate,
}

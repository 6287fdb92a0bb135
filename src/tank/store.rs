//! In-memory tank store.
//!
//! The store owns the authoritative, ordered collection of tank records.
//! Insertion order is preserved, lookups are linear scans over the sequence.
//! Every mutating operation runs its full set of checks before touching the
//! sequence, so a failed operation leaves the store exactly as it was.

use chrono::{Local, NaiveDate};

use super::errors::{TankError, TankResult};
use super::model::Tank;
use super::validator::validate_at;

/// Ordered collection of tank records with unique ids.
///
/// Constructed empty; holds no locks and performs no I/O. Callers that share
/// a store across threads must wrap it in their own synchronization, keeping
/// each mutating operation's check-then-act sequence in one critical section.
pub struct TankStore {
    tanks: Vec<Tank>,
    /// Source of "today" for refill-date validation. Injectable so tests
    /// never depend on the wall clock.
    today: fn() -> NaiveDate,
}

fn wall_clock_today() -> NaiveDate {
    Local::now().date_naive()
}

impl TankStore {
    /// Creates an empty store validating against the wall-clock date.
    pub fn new() -> Self {
        Self::with_clock(wall_clock_today)
    }

    /// Creates an empty store with an injected "today" source.
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Self {
            tanks: Vec::new(),
            today,
        }
    }

    /// Validates the candidate, rejects a duplicate id, then appends.
    ///
    /// Returns the stored record unchanged.
    ///
    /// # Errors
    ///
    /// - `InvalidVolume` / `FutureDate` if the candidate fails validation
    /// - `DuplicateId` if a stored tank already carries the candidate's id
    pub fn create(&mut self, candidate: Tank) -> TankResult<Tank> {
        validate_at(&candidate, (self.today)())?;

        if self.tanks.iter().any(|t| t.id == candidate.id) {
            return Err(TankError::DuplicateId(candidate.id));
        }

        self.tanks.push(candidate.clone());
        Ok(candidate)
    }

    /// Returns all tanks in insertion order.
    pub fn list(&self) -> &[Tank] {
        &self.tanks
    }

    /// Returns the tank with the given id.
    ///
    /// # Errors
    ///
    /// `NotFound` if no stored tank has this id.
    pub fn get(&self, id: u64) -> TankResult<&Tank> {
        self.tanks
            .iter()
            .find(|t| t.id == id)
            .ok_or(TankError::NotFound(id))
    }

    /// Replaces the tank with the given id wholesale.
    ///
    /// The replacement keeps the replaced tank's position in the sequence.
    /// Its own `id` may differ from `id`: this is a full overwrite, not a
    /// keyed merge, so an update can rename a tank's identity. The new id
    /// must not collide with any *other* stored tank.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no stored tank has `id`
    /// - `InvalidVolume` / `FutureDate` if the replacement fails validation
    /// - `DuplicateId` if another tank already carries the replacement's id
    pub fn update(&mut self, id: u64, replacement: Tank) -> TankResult<Tank> {
        let position = self
            .tanks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TankError::NotFound(id))?;

        validate_at(&replacement, (self.today)())?;

        if self
            .tanks
            .iter()
            .any(|t| t.id == replacement.id && t.id != id)
        {
            return Err(TankError::DuplicateId(replacement.id));
        }

        self.tanks[position] = replacement.clone();
        Ok(replacement)
    }

    /// Removes the tank with the given id, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// `NotFound` if no stored tank has this id.
    pub fn delete(&mut self, id: u64) -> TankResult<()> {
        let position = self
            .tanks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TankError::NotFound(id))?;

        self.tanks.remove(position);
        Ok(())
    }

    /// Number of stored tanks.
    pub fn len(&self) -> usize {
        self.tanks.len()
    }

    /// True when the store holds no tanks.
    pub fn is_empty(&self) -> bool {
        self.tanks.is_empty()
    }
}

impl Default for TankStore {
    fn default() -> Self {
        Self::new()
    }
}

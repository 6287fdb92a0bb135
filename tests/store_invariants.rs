//! Store Invariant Tests
//!
//! End-to-end properties of the tank store:
//! - Id uniqueness is enforced on create and update
//! - Validation failures never mutate the store
//! - Insertion order is preserved across creates and deletes

use chrono::NaiveDate;
use tankdb::tank::{FuelType, Tank, TankError, TankStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn test_store() -> TankStore {
    TankStore::with_clock(fixed_today)
}

fn tank(id: u64, fuel_type: FuelType) -> Tank {
    Tank {
        id,
        fuel_type,
        capacity: 1000.0,
        current_volume: 500.0,
        last_refill_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

fn ids(store: &TankStore) -> Vec<u64> {
    store.list().iter().map(|t| t.id).collect()
}

// =============================================================================
// Create / Get Round Trips
// =============================================================================

/// Every valid candidate with a distinct id can be created and fetched back
/// unchanged.
#[test]
fn test_create_then_get_round_trip() {
    let mut store = test_store();

    for id in 1..=20 {
        let candidate = tank(id, FuelType::Ai92);
        let created = store.create(candidate.clone()).unwrap();
        assert_eq!(created, candidate);
        assert_eq!(store.get(id).unwrap(), &candidate);
    }

    assert_eq!(store.len(), 20);
}

/// List returns exactly the created records in creation order.
#[test]
fn test_list_returns_records_in_creation_order() {
    let mut store = test_store();
    let order = [10, 3, 7, 1, 5];

    for id in order {
        store.create(tank(id, FuelType::Diesel)).unwrap();
    }

    assert_eq!(ids(&store), order.to_vec());
}

// =============================================================================
// Rejections Leave the Store Unchanged
// =============================================================================

#[test]
fn test_duplicate_create_is_rejected_without_mutation() {
    let mut store = test_store();
    store.create(tank(1, FuelType::Ai95)).unwrap();
    let before: Vec<Tank> = store.list().to_vec();

    let result = store.create(tank(1, FuelType::Diesel));
    assert_eq!(result, Err(TankError::DuplicateId(1)));
    assert_eq!(store.list(), &before[..]);
}

#[test]
fn test_overfull_create_is_rejected_without_mutation() {
    let mut store = test_store();
    let mut candidate = tank(1, FuelType::Ai95);
    candidate.current_volume = candidate.capacity + 1.0;

    let result = store.create(candidate);
    assert_eq!(
        result,
        Err(TankError::InvalidVolume {
            volume: 1001.0,
            capacity: 1000.0
        })
    );
    assert!(store.is_empty());
}

#[test]
fn test_future_dated_create_is_rejected_without_mutation() {
    let mut store = test_store();
    let future = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
    let mut candidate = tank(1, FuelType::Ai98);
    candidate.last_refill_date = future;

    let result = store.create(candidate);
    assert_eq!(result, Err(TankError::FutureDate { date: future }));
    assert!(store.is_empty());
}

#[test]
fn test_update_of_missing_id_is_rejected_without_mutation() {
    let mut store = test_store();
    store.create(tank(1, FuelType::Ai95)).unwrap();
    let before: Vec<Tank> = store.list().to_vec();

    let result = store.update(99, tank(99, FuelType::Diesel));
    assert_eq!(result, Err(TankError::NotFound(99)));
    assert_eq!(store.list(), &before[..]);
}

// =============================================================================
// Update Identity Semantics
// =============================================================================

/// An update may rename a tank's identity, keeping its list position.
#[test]
fn test_update_renames_identity_in_place() {
    let mut store = test_store();
    store.create(tank(1, FuelType::Ai92)).unwrap();
    store.create(tank(5, FuelType::Ai95)).unwrap();
    store.create(tank(9, FuelType::Ai98)).unwrap();

    store.update(5, tank(7, FuelType::Diesel)).unwrap();

    assert_eq!(ids(&store), vec![1, 7, 9]);
    assert_eq!(store.get(5).err(), Some(TankError::NotFound(5)));
    assert_eq!(store.get(7).unwrap().fuel_type, FuelType::Diesel);
}

/// A rename colliding with a third record's id is rejected; keeping the
/// record's own id is not a collision.
#[test]
fn test_update_collision_rules() {
    let mut store = test_store();
    store.create(tank(5, FuelType::Ai92)).unwrap();
    store.create(tank(7, FuelType::Ai95)).unwrap();

    assert_eq!(
        store.update(5, tank(7, FuelType::Diesel)),
        Err(TankError::DuplicateId(7))
    );
    assert_eq!(store.get(5).unwrap().fuel_type, FuelType::Ai92);

    assert!(store.update(5, tank(5, FuelType::Diesel)).is_ok());
    assert_eq!(store.get(5).unwrap().fuel_type, FuelType::Diesel);
}

// =============================================================================
// Full Lifecycle Scenario
// =============================================================================

/// The complete create, duplicate, invalid update, delete, get sequence.
#[test]
fn test_full_lifecycle_scenario() {
    let mut store = test_store();

    let original = Tank {
        id: 1,
        fuel_type: FuelType::Ai95,
        capacity: 1000.0,
        current_volume: 500.0,
        last_refill_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    store.create(original.clone()).unwrap();
    assert_eq!(store.list(), &[original.clone()][..]);

    // Second create with the same id is rejected
    assert_eq!(
        store.create(original.clone()),
        Err(TankError::DuplicateId(1))
    );

    // Overfull replacement is rejected, original untouched
    let overfull = Tank {
        id: 1,
        fuel_type: FuelType::Diesel,
        capacity: 1000.0,
        current_volume: 1200.0,
        last_refill_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    assert_eq!(
        store.update(1, overfull),
        Err(TankError::InvalidVolume {
            volume: 1200.0,
            capacity: 1000.0
        })
    );
    assert_eq!(store.get(1).unwrap(), &original);

    // Delete, then the id is gone
    store.delete(1).unwrap();
    assert_eq!(store.get(1).err(), Some(TankError::NotFound(1)));
    assert!(store.is_empty());
}

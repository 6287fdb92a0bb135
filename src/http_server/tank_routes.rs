//! Tank HTTP Routes
//!
//! Endpoints mapping the tank store's operations onto HTTP. The store itself
//! is single-threaded by design, so it sits behind one `RwLock`: mutating
//! handlers hold the write lock across their whole check-then-act sequence,
//! list and get share the read lock.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::observability::Logger;
use crate::tank::{Tank, TankError, TankStore};

// ==================
// Shared State
// ==================

/// Tank store state shared across handlers
pub struct TankState {
    store: RwLock<TankStore>,
}

impl TankState {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(TankStore::new()),
        }
    }

    /// Build state around an existing store (used by tests to fix the clock)
    pub fn with_store(store: TankStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

impl Default for TankState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Translate a store error into an HTTP status and body.
///
/// Validation failures map to 422, duplicate ids to 400, missing ids to 404.
fn error_response(err: TankError) -> HandlerError {
    let status = match &err {
        TankError::InvalidVolume { .. } | TankError::FutureDate { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        TankError::DuplicateId(_) => StatusCode::BAD_REQUEST,
        TankError::NotFound(_) => StatusCode::NOT_FOUND,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: status.as_u16(),
        }),
    )
}

// ==================
// Tank Routes
// ==================

/// Create tank routes
pub fn tank_routes(state: Arc<TankState>) -> Router {
    Router::new()
        .route("/tanks", post(create_tank_handler))
        .route("/tanks", get(list_tanks_handler))
        .route("/tanks/:id", get(get_tank_handler))
        .route("/tanks/:id", put(update_tank_handler))
        .route("/tanks/:id", delete(delete_tank_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_tank_handler(
    State(state): State<Arc<TankState>>,
    Json(candidate): Json<Tank>,
) -> Result<Json<Tank>, HandlerError> {
    let mut store = state.store.write().unwrap();
    match store.create(candidate) {
        Ok(tank) => {
            Logger::info("TANK_CREATED", &[("tank_id", &tank.id.to_string())]);
            Ok(Json(tank))
        }
        Err(err) => {
            Logger::warn("TANK_CREATE_REJECTED", &[("reason", &err.to_string())]);
            Err(error_response(err))
        }
    }
}

async fn list_tanks_handler(State(state): State<Arc<TankState>>) -> Json<Vec<Tank>> {
    let store = state.store.read().unwrap();
    Json(store.list().to_vec())
}

async fn get_tank_handler(
    State(state): State<Arc<TankState>>,
    Path(id): Path<u64>,
) -> Result<Json<Tank>, HandlerError> {
    let store = state.store.read().unwrap();
    store
        .get(id)
        .map(|tank| Json(tank.clone()))
        .map_err(error_response)
}

async fn update_tank_handler(
    State(state): State<Arc<TankState>>,
    Path(id): Path<u64>,
    Json(replacement): Json<Tank>,
) -> Result<Json<Tank>, HandlerError> {
    let mut store = state.store.write().unwrap();
    match store.update(id, replacement) {
        Ok(tank) => {
            Logger::info(
                "TANK_UPDATED",
                &[("path_id", &id.to_string()), ("tank_id", &tank.id.to_string())],
            );
            Ok(Json(tank))
        }
        Err(err) => {
            Logger::warn(
                "TANK_UPDATE_REJECTED",
                &[("path_id", &id.to_string()), ("reason", &err.to_string())],
            );
            Err(error_response(err))
        }
    }
}

async fn delete_tank_handler(
    State(state): State<Arc<TankState>>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, HandlerError> {
    let mut store = state.store.write().unwrap();
    match store.delete(id) {
        Ok(()) => {
            Logger::info("TANK_DELETED", &[("tank_id", &id.to_string())]);
            Ok(Json(MessageResponse {
                message: "Tank deleted".to_string(),
            }))
        }
        Err(err) => Err(error_response(err)),
    }
}

//! # tankdb HTTP Server Module
//!
//! HTTP transport for the tank store. The transport owns serialization,
//! status-code mapping, and request routing; all business rules stay in
//! [`crate::tank`].
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /tanks` - Create a tank
//! - `GET /tanks` - List all tanks
//! - `GET /tanks/{id}` - Fetch one tank
//! - `PUT /tanks/{id}` - Replace a tank wholesale
//! - `DELETE /tanks/{id}` - Delete a tank

pub mod config;
pub mod server;
pub mod tank_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use tank_routes::TankState;

//! HTTP service for the prescription form.
//!
//! Receives form submissions on `/recetario_page`, stores them, and
//! echoes the stored record back so the form can append it to its
//! saved list. Directory routes for pets, owners, and veterinarians
//! share the same database.
//!
//! The router is composable: `recetario_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::recetario_router;
pub use types::ApiContext;

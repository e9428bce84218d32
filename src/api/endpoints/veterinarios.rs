//! Veterinarian endpoints.
//!
//! Two endpoints:
//! - `GET /veterinarios`: all registered veterinarians
//! - `POST /veterinarios`: register a veterinarian

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{NuevoVeterinario, Veterinario};

/// `GET /veterinarios`: all registered veterinarians.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Veterinario>>, ApiError> {
    let conn = ctx.open_db()?;
    let veterinarios = repository::get_all_veterinarios(&conn)?;
    Ok(Json(veterinarios))
}

/// `POST /veterinarios`: register a veterinarian.
///
/// Email must be unique; a duplicate is a client error, not a constraint
/// surprise bubbling up as 500.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<NuevoVeterinario>,
) -> Result<(StatusCode, Json<Veterinario>), ApiError> {
    let nombre = input.nombre.as_deref().unwrap_or("").trim();
    if nombre.is_empty() {
        return Err(ApiError::BadRequest("nombre is required".into()));
    }
    let email = input.email.as_deref().unwrap_or("").trim();
    if email.is_empty() {
        return Err(ApiError::BadRequest("email is required".into()));
    }

    let conn = ctx.open_db()?;
    if repository::veterinario_email_exists(&conn, email)? {
        return Err(ApiError::BadRequest(
            "Email is already registered".into(),
        ));
    }

    let veterinario =
        repository::insert_veterinario(&conn, nombre, email, input.telefono.as_deref())?;

    tracing::info!(id = veterinario.id, "Veterinario registered");

    Ok((StatusCode::CREATED, Json(veterinario)))
}

//! Owner endpoints.
//!
//! Two endpoints:
//! - `GET /propietarios`: all owners, each with their pets embedded
//! - `POST /propietarios`: register an owner

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{NuevoPropietario, Propietario, PropietarioView};

/// `GET /propietarios`: all owners with their pets.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<PropietarioView>>, ApiError> {
    let conn = ctx.open_db()?;
    let propietarios = repository::get_all_propietarios(&conn)?;

    let mut views = Vec::with_capacity(propietarios.len());
    for propietario in propietarios {
        let mascotas = repository::mascotas_de_propietario(&conn, propietario.id)?;
        views.push(PropietarioView { propietario, mascotas });
    }

    Ok(Json(views))
}

/// `POST /propietarios`: register an owner.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<NuevoPropietario>,
) -> Result<(StatusCode, Json<Propietario>), ApiError> {
    let nombre = input.nombre.as_deref().unwrap_or("").trim();
    if nombre.is_empty() {
        return Err(ApiError::BadRequest("nombre is required".into()));
    }
    let email = input.email.as_deref().unwrap_or("").trim();
    if email.is_empty() {
        return Err(ApiError::BadRequest("email is required".into()));
    }

    let conn = ctx.open_db()?;
    if repository::propietario_email_exists(&conn, email)? {
        return Err(ApiError::BadRequest(
            "Email is already registered".into(),
        ));
    }

    let propietario = repository::insert_propietario(&conn, nombre, email)?;

    tracing::info!(id = propietario.id, "Propietario registered");

    Ok((StatusCode::CREATED, Json(propietario)))
}

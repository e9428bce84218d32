//! Pet endpoints.
//!
//! Two endpoints:
//! - `GET /mascotas`: all pets, each with its owner embedded
//! - `POST /mascotas`: register a pet under an existing owner

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{MascotaView, NuevaMascota};

/// `GET /mascotas`: all pets with their owner summaries.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<MascotaView>>, ApiError> {
    let conn = ctx.open_db()?;
    let mascotas = repository::get_all_mascotas(&conn)?;

    let mut views = Vec::with_capacity(mascotas.len());
    for mascota in mascotas {
        // propietario_id is a foreign key, so the lookup can only fail if
        // the database itself is inconsistent.
        let propietario = repository::get_propietario(&conn, mascota.propietario_id)?
            .ok_or_else(|| {
                ApiError::Internal(format!(
                    "mascota {} references missing propietario {}",
                    mascota.id, mascota.propietario_id
                ))
            })?;
        views.push(MascotaView { mascota, propietario });
    }

    Ok(Json(views))
}

/// `POST /mascotas`: register a pet under an existing owner.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<NuevaMascota>,
) -> Result<(StatusCode, Json<MascotaView>), ApiError> {
    let nombre = input.nombre.as_deref().unwrap_or("").trim();
    if nombre.is_empty() {
        return Err(ApiError::BadRequest("nombre is required".into()));
    }
    let especie = input.especie.as_deref().unwrap_or("").trim();
    if especie.is_empty() {
        return Err(ApiError::BadRequest("especie is required".into()));
    }
    let Some(propietario_id) = input.propietario_id else {
        return Err(ApiError::BadRequest("propietario_id is required".into()));
    };

    let conn = ctx.open_db()?;
    let Some(propietario) = repository::get_propietario(&conn, propietario_id)? else {
        return Err(ApiError::NotFound(format!(
            "Propietario {propietario_id} not found"
        )));
    };

    let mascota = repository::insert_mascota(
        &conn,
        nombre,
        especie,
        input.raza.as_deref(),
        input.edad,
        input.peso,
        input.sexo.as_deref(),
        propietario_id,
    )?;

    tracing::info!(id = mascota.id, propietario_id, "Mascota registered");

    Ok((StatusCode::CREATED, Json(MascotaView { mascota, propietario })))
}

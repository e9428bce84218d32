//! Prescription endpoints.
//!
//! Two endpoints:
//! - `POST /recetario_page`: save a submitted prescription form
//! - `GET /recetas`: stored prescriptions, optionally bounded by fecha

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::{Receta, StoredReceta};

/// `POST /recetario_page`: save a submitted prescription form.
///
/// The form posts all ten fields as strings. Everything except `raza`
/// must be non-empty. Responds 201 with the stored record, id included,
/// which the form appends to its saved list verbatim.
pub async fn intake(
    State(ctx): State<ApiContext>,
    Json(receta): Json<Receta>,
) -> Result<(StatusCode, Json<StoredReceta>), ApiError> {
    let missing = receta.missing_required();
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
    if chrono::NaiveDate::parse_from_str(&receta.fecha, "%Y-%m-%d").is_err() {
        return Err(ApiError::BadRequest(
            "Invalid fecha format (expected YYYY-MM-DD)".into(),
        ));
    }

    let conn = ctx.open_db()?;
    let stored = repository::insert_receta(&conn, &receta)?;

    tracing::info!(id = stored.id, mascota = %stored.receta.nombre_mascota, "Receta stored");

    Ok((StatusCode::CREATED, Json(stored)))
}

#[derive(Deserialize)]
pub struct RecetasQuery {
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
}

/// `GET /recetas`: stored prescriptions in insertion order.
///
/// Both bounds are optional and inclusive.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<RecetasQuery>,
) -> Result<Json<Vec<StoredReceta>>, ApiError> {
    let fecha_inicio = parse_fecha(query.fecha_inicio.as_deref(), "fecha_inicio")?;
    let fecha_fin = parse_fecha(query.fecha_fin.as_deref(), "fecha_fin")?;

    let conn = ctx.open_db()?;
    let recetas = repository::fetch_recetas_filtered(&conn, fecha_inicio, fecha_fin)?;

    Ok(Json(recetas))
}

fn parse_fecha(
    value: Option<&str>,
    name: &str,
) -> Result<Option<chrono::NaiveDate>, ApiError> {
    value
        .map(|raw| {
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ApiError::BadRequest(format!("Invalid {name} format (expected YYYY-MM-DD)"))
            })
        })
        .transpose()
}

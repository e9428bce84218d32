//! Service router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! The route set mirrors the form client: one intake route plus plain
//! resource listings. CORS stays permissive because the form is served
//! from a different origin than the service.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the service router.
///
/// Handlers use `State<ApiContext>` provided via `with_state`; the CORS
/// layer wraps the whole route set so preflight requests succeed without
/// touching a handler.
pub fn recetario_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/recetario_page", post(endpoints::recetas::intake))
        .route("/recetas", get(endpoints::recetas::list))
        .route(
            "/mascotas",
            get(endpoints::mascotas::list).post(endpoints::mascotas::create),
        )
        .route(
            "/veterinarios",
            get(endpoints::veterinarios::list).post(endpoints::veterinarios::create),
        )
        .route(
            "/propietarios",
            get(endpoints::propietarios::list).post(endpoints::propietarios::create),
        )
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}

//! Service lifecycle: runs the axum server on a pre-bound listener
//! until the process is asked to stop.

use tokio::net::TcpListener;

use crate::api::router::recetario_router;
use crate::api::types::ApiContext;

/// Serve the router on `listener` until shutdown.
///
/// Runs in the foreground. Ctrl-C triggers a graceful shutdown so
/// in-flight requests finish before the process exits.
pub async fn serve(ctx: ApiContext, listener: TcpListener) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Recetario service listening");

    let app = recetario_router(ctx);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_routes_over_http() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("recetario.db");
        crate::db::open_database(&db_path).unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve(ApiContext::new(db_path), listener));

        let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let resp = reqwest::get(format!("http://{addr}/nonexistent"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.abort();
    }
}

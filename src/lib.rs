pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod form;
pub mod listing;
pub mod models;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Service entry point: tracing, database, then the HTTP listener.
pub async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Recetario starting v{}", config::APP_VERSION);

    let db_path = config::database_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("error creating data directory");
    }
    // Open once at startup so migrations run before the first request.
    db::open_database(&db_path).expect("error opening database");
    tracing::info!(path = %db_path.display(), "Database ready");

    let ctx = api::ApiContext::new(db_path);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config::server_port()));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("error binding service address");

    api::server::serve(ctx, listener)
        .await
        .expect("error while running Recetario");
}

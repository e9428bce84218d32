use std::path::PathBuf;

/// Application identity, shared by logs and the health endpoint.
pub const APP_NAME: &str = "Recetario";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed base URL the form submits against.
/// The records service listens on 3001 by default; tests inject their own.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:3001";

/// Default port for the records service.
pub const DEFAULT_PORT: u16 = 3001;

/// Outbound request timeout for form submissions, in seconds.
pub const SUBMIT_TIMEOUT_SECS: u64 = 30;

/// User-visible data directory: `~/Recetario/` on every platform.
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Recetario")
}

/// Database path for the records service.
/// `RECETARIO_DB` overrides the default location under the data dir.
pub fn database_path() -> PathBuf {
    match std::env::var("RECETARIO_DB") {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => app_data_dir().join("recetario.db"),
    }
}

/// Port the records service binds to (`RECETARIO_PORT`, default 3001).
pub fn server_port() -> u16 {
    std::env::var("RECETARIO_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "recetario=info".to_string()
}

//! Outbound HTTP client for the records service.
//!
//! The form talks to the service through the `SubmitClient` trait so tests
//! can swap in `MockClient` and exercise the whole submit flow offline.

use std::future::Future;
use std::sync::Mutex;

use crate::config;
use crate::models::{Receta, StoredReceta};

/// Errors at the submit boundary.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    SubmissionInFlight,
    #[error("Cannot reach the records service at {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("HTTP client error: {0}")]
    Http(String),
    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse service response: {0}")]
    ResponseParsing(String),
}

/// Anything that can persist a draft remotely and hand back the stored record.
pub trait SubmitClient: Send + Sync {
    fn submit(
        &self,
        receta: &Receta,
    ) -> impl Future<Output = Result<StoredReceta, SubmitError>> + Send;
}

/// HTTP client for the records service.
pub struct RecetaClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl RecetaClient {
    /// Create a client pointing at the given service base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client for the fixed default service URL.
    pub fn default_service() -> Self {
        Self::new(config::DEFAULT_SERVICE_URL, config::SUBMIT_TIMEOUT_SECS)
    }
}

impl SubmitClient for RecetaClient {
    fn submit(
        &self,
        receta: &Receta,
    ) -> impl Future<Output = Result<StoredReceta, SubmitError>> + Send {
        async move {
            let url = format!("{}/recetario_page", self.base_url);

            let response = self
                .client
                .post(&url)
                .json(receta)
                .send()
                .await
                .map_err(|e| {
                    if e.is_connect() {
                        SubmitError::Connection(self.base_url.clone())
                    } else if e.is_timeout() {
                        SubmitError::Timeout(self.timeout_secs)
                    } else {
                        SubmitError::Http(e.to_string())
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SubmitError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            response
                .json::<StoredReceta>()
                .await
                .map_err(|e| SubmitError::ResponseParsing(e.to_string()))
        }
    }
}

/// What a `MockClient` does with each submission.
enum MockBehavior {
    /// Always return this exact stored record.
    Respond(StoredReceta),
    /// Echo the submitted fields back with this id, like the real service.
    Echo(i64),
    /// Fail as if the service were unreachable.
    Unreachable,
}

/// Mock submit client for tests: configurable outcome, records every draft
/// it was asked to submit.
pub struct MockClient {
    behavior: MockBehavior,
    submitted: Mutex<Vec<Receta>>,
}

impl MockClient {
    pub fn responding(response: StoredReceta) -> Self {
        Self {
            behavior: MockBehavior::Respond(response),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn echoing(id: i64) -> Self {
        Self {
            behavior: MockBehavior::Echo(id),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            behavior: MockBehavior::Unreachable,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Every draft this mock has been asked to submit, in order.
    pub fn submissions(&self) -> Vec<Receta> {
        self.submitted.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl SubmitClient for MockClient {
    fn submit(
        &self,
        receta: &Receta,
    ) -> impl Future<Output = Result<StoredReceta, SubmitError>> + Send {
        async move {
            if let Ok(mut submitted) = self.submitted.lock() {
                submitted.push(receta.clone());
            }
            match &self.behavior {
                MockBehavior::Respond(stored) => Ok(stored.clone()),
                MockBehavior::Echo(id) => Ok(StoredReceta {
                    id: *id,
                    receta: receta.clone(),
                }),
                MockBehavior::Unreachable => {
                    Err(SubmitError::Connection("http://mock.invalid".into()))
                }
            }
        }
    }
}

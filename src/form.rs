//! Prescription form session.
//!
//! Owns the in-progress draft, the saved-list visibility, and the submit
//! flow: snapshot the draft, POST it through a `SubmitClient`, append the
//! confirmed record to the shared store, reset the draft. Failures leave
//! the draft and store untouched and stay readable via `last_error`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::{SubmitClient, SubmitError};
use crate::models::{Receta, RecetaField, StoredReceta};
use crate::store::RecetaStore;

// ═══════════════════════════════════════════════════════════
// Visibility:saved-list toggle state
// ═══════════════════════════════════════════════════════════

/// Whether the saved-records section is shown.
///
/// `toggle` operates on the value itself, never on anything standing in
/// for it, so successive toggles always alternate: Hidden → Visible →
/// Hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Flip to the other state. The only transition there is.
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// FormSession:one mounted recetario form
// ═══════════════════════════════════════════════════════════

/// State of one mounted prescription form.
///
/// Interior mutability throughout: the session is held behind `Arc` by a
/// UI layer that fires edits, toggles and submits as events. The shared
/// store is a collaborator passed in at construction; this session only
/// appends to it and reads snapshots from it.
pub struct FormSession {
    /// The in-progress record. Starts all-empty, reset all-empty after a
    /// successful submit.
    draft: Mutex<Receta>,
    /// Saved-list visibility. Starts hidden.
    visibility: Mutex<Visibility>,
    /// Set while a submission is outstanding. A second submit attempt is
    /// rejected until the first settles.
    in_flight: AtomicBool,
    /// Message of the most recent failed submit, cleared when the next
    /// submission starts. The retry surface for the UI.
    last_error: Mutex<Option<String>>,
    store: Arc<RecetaStore>,
}

impl FormSession {
    pub fn new(store: Arc<RecetaStore>) -> Self {
        Self {
            draft: Mutex::new(Receta::default()),
            visibility: Mutex::new(Visibility::default()),
            in_flight: AtomicBool::new(false),
            last_error: Mutex::new(None),
            store,
        }
    }

    // ── Draft editing ────────────────────────────────────────

    /// Overwrite one field of the draft. Last write wins. No validation:
    /// required-ness is advisory at this layer and enforced by the service.
    pub fn set_field(&self, field: RecetaField, value: &str) {
        if let Ok(mut draft) = self.draft.lock() {
            draft.set(field, value);
        }
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> Receta {
        self.draft.lock().map(|d| d.clone()).unwrap_or_default()
    }

    fn reset_draft(&self) {
        if let Ok(mut draft) = self.draft.lock() {
            *draft = Receta::default();
        }
    }

    // ── Saved-list visibility ────────────────────────────────

    /// Flip the saved-list visibility and return the new state.
    pub fn toggle_saved(&self) -> Visibility {
        match self.visibility.lock() {
            Ok(mut visibility) => {
                *visibility = visibility.toggle();
                *visibility
            }
            Err(_) => Visibility::Hidden,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
            .lock()
            .map(|v| *v)
            .unwrap_or(Visibility::Hidden)
    }

    /// Input for the saved-records section: a store snapshot while
    /// visible, `None` while hidden.
    pub fn saved_recetas(&self) -> Option<Vec<StoredReceta>> {
        match self.visibility() {
            Visibility::Visible => Some(self.store.current()),
            Visibility::Hidden => None,
        }
    }

    pub fn store(&self) -> &RecetaStore {
        &self.store
    }

    // ── Submit ───────────────────────────────────────────────

    /// Whether a submission is outstanding. The UI disables its submit
    /// action while this is true.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Message of the most recent failed submit, if any.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().map(|e| e.clone()).unwrap_or(None)
    }

    fn set_last_error(&self, error: Option<String>) {
        if let Ok(mut slot) = self.last_error.lock() {
            *slot = error;
        }
    }

    /// Submit the current draft to the records service.
    ///
    /// On success the confirmed record is appended to the shared store and
    /// the draft resets to all-empty. On failure the draft and store are
    /// untouched, the error is logged and kept in `last_error`, and the
    /// caller gets it back to act on.
    ///
    /// While one submission is outstanding, further calls return
    /// `SubmitError::SubmissionInFlight` without touching anything.
    pub async fn submit(
        &self,
        client: &impl SubmitClient,
    ) -> Result<StoredReceta, SubmitError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::SubmissionInFlight);
        }
        // Released on drop, so a cancelled submit cannot wedge the form.
        let _guard = InFlightGuard(&self.in_flight);

        self.set_last_error(None);
        let snapshot = self.draft();

        match client.submit(&snapshot).await {
            Ok(stored) => {
                self.store.append(stored.clone());
                self.reset_draft();
                tracing::info!(id = stored.id, "Receta saved");
                Ok(stored)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to save receta");
                self.set_last_error(Some(err.to_string()));
                Err(err)
            }
        }
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use tokio::sync::Notify;

    use super::*;
    use crate::client::MockClient;

    fn session() -> (Arc<RecetaStore>, FormSession) {
        let store = Arc::new(RecetaStore::new());
        let session = FormSession::new(Arc::clone(&store));
        (store, session)
    }

    fn fill_rex(session: &FormSession) {
        session.set_field(RecetaField::NombreMascota, "Rex");
        session.set_field(RecetaField::Edad, "3");
        session.set_field(RecetaField::Peso, "12");
        session.set_field(RecetaField::Raza, "Labrador");
        session.set_field(RecetaField::Sexo, "Macho");
        session.set_field(RecetaField::Propietario, "Ana");
        session.set_field(RecetaField::Fecha, "2024-05-01");
        session.set_field(RecetaField::Diagnostico, "Otitis");
        session.set_field(RecetaField::Tratamiento, "Gotas");
        session.set_field(RecetaField::Veterinario, "Dr. Lee");
    }

    // ── Draft editing ────────────────────────────────────────

    #[test]
    fn draft_starts_all_empty() {
        let (_, session) = session();
        assert_eq!(session.draft(), Receta::default());
    }

    #[test]
    fn edits_are_last_write_wins() {
        let (_, session) = session();
        session.set_field(RecetaField::NombreMascota, "R");
        session.set_field(RecetaField::NombreMascota, "Re");
        session.set_field(RecetaField::NombreMascota, "Rex");
        session.set_field(RecetaField::Edad, "3");
        session.set_field(RecetaField::Edad, "3");

        let expected = Receta {
            nombre_mascota: "Rex".into(),
            edad: "3".into(),
            ..Receta::default()
        };
        assert_eq!(session.draft(), expected);
    }

    #[test]
    fn editing_never_touches_other_fields() {
        let (_, session) = session();
        fill_rex(&session);
        session.set_field(RecetaField::Diagnostico, "Dermatitis");

        let draft = session.draft();
        assert_eq!(draft.diagnostico, "Dermatitis");
        assert_eq!(draft.nombre_mascota, "Rex");
        assert_eq!(draft.veterinario, "Dr. Lee");
    }

    // ── Visibility ───────────────────────────────────────────

    #[test]
    fn saved_list_starts_hidden() {
        let (_, session) = session();
        assert_eq!(session.visibility(), Visibility::Hidden);
        assert!(session.saved_recetas().is_none());
    }

    #[test]
    fn toggle_twice_ends_hidden() {
        let (_, session) = session();
        assert_eq!(session.toggle_saved(), Visibility::Visible);
        assert!(session.saved_recetas().is_some());
        assert_eq!(session.toggle_saved(), Visibility::Hidden);
        assert!(session.saved_recetas().is_none());
    }

    #[test]
    fn visible_list_reads_the_shared_store() {
        let (store, session) = session();
        store.append(StoredReceta {
            id: 1,
            receta: Receta::default(),
        });

        session.toggle_saved();
        let saved = session.saved_recetas().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, 1);
    }

    // ── Submit ───────────────────────────────────────────────

    #[tokio::test]
    async fn successful_submit_appends_and_resets() {
        let (store, session) = session();
        fill_rex(&session);
        let sent = session.draft();

        let client = MockClient::echoing(7);
        let stored = session.submit(&client).await.unwrap();

        assert_eq!(stored.id, 7);
        assert_eq!(stored.receta, sent);
        assert_eq!(store.len(), 1);
        assert_eq!(store.current()[0], stored);
        assert_eq!(session.draft(), Receta::default());
        assert!(session.last_error().is_none());
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn submit_sends_the_draft_snapshot() {
        let (_, session) = session();
        fill_rex(&session);
        let snapshot = session.draft();

        let client = MockClient::echoing(1);
        session.submit(&client).await.unwrap();

        assert_eq!(client.submissions(), vec![snapshot]);
    }

    #[tokio::test]
    async fn failed_submit_preserves_draft_and_store() {
        let (store, session) = session();
        fill_rex(&session);
        let before = session.draft();

        let client = MockClient::unreachable();
        let err = session.submit(&client).await.unwrap_err();

        assert!(matches!(err, SubmitError::Connection(_)));
        assert_eq!(session.draft(), before);
        assert!(store.is_empty());
        assert!(session.last_error().is_some());
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn next_submit_clears_the_error_state() {
        let (_, session) = session();
        fill_rex(&session);

        session.submit(&MockClient::unreachable()).await.unwrap_err();
        assert!(session.last_error().is_some());

        session.submit(&MockClient::echoing(1)).await.unwrap();
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn rex_scenario_round_trip() {
        let (store, session) = session();
        fill_rex(&session);

        let stored = session.submit(&MockClient::echoing(7)).await.unwrap();

        assert_eq!(store.len(), 1);
        let entry = &store.current()[0];
        assert_eq!(entry.id, 7);
        assert_eq!(entry.receta.nombre_mascota, "Rex");
        assert_eq!(entry.receta.edad, "3");
        assert_eq!(entry.receta.peso, "12");
        assert_eq!(entry.receta.raza, "Labrador");
        assert_eq!(entry.receta.sexo, "Macho");
        assert_eq!(entry.receta.propietario, "Ana");
        assert_eq!(entry.receta.fecha, "2024-05-01");
        assert_eq!(entry.receta.diagnostico, "Otitis");
        assert_eq!(entry.receta.tratamiento, "Gotas");
        assert_eq!(entry.receta.veterinario, "Dr. Lee");
        assert_eq!(*entry, stored);
        assert_eq!(session.draft(), Receta::default());
    }

    // ── In-flight guard ──────────────────────────────────────

    /// Holds every submission until the test opens the gate.
    struct GatedClient {
        gate: Notify,
        response: StoredReceta,
    }

    impl GatedClient {
        fn new(response: StoredReceta) -> Self {
            Self {
                gate: Notify::new(),
                response,
            }
        }
    }

    impl SubmitClient for GatedClient {
        fn submit(
            &self,
            _receta: &Receta,
        ) -> impl Future<Output = Result<StoredReceta, SubmitError>> + Send {
            async move {
                self.gate.notified().await;
                Ok(self.response.clone())
            }
        }
    }

    fn stored(id: i64) -> StoredReceta {
        StoredReceta {
            id,
            receta: Receta::default(),
        }
    }

    #[tokio::test]
    async fn second_submit_while_first_in_flight_is_rejected() {
        let store = Arc::new(RecetaStore::new());
        let session = Arc::new(FormSession::new(Arc::clone(&store)));
        session.set_field(RecetaField::NombreMascota, "Rex");

        let gated = Arc::new(GatedClient::new(stored(1)));
        let first = {
            let session = Arc::clone(&session);
            let gated = Arc::clone(&gated);
            tokio::spawn(async move { session.submit(gated.as_ref()).await })
        };

        // Let the spawned submit start and park on the gate.
        for _ in 0..100 {
            if session.is_submitting() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(session.is_submitting());

        let second = session.submit(&MockClient::echoing(99)).await;
        assert!(matches!(second, Err(SubmitError::SubmissionInFlight)));
        assert!(store.is_empty());
        assert_eq!(session.draft().nombre_mascota, "Rex");

        gated.gate.notify_one();
        let outcome = first.await.unwrap();
        assert!(outcome.is_ok());
        assert_eq!(store.len(), 1);
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn cancelled_submit_releases_the_guard() {
        let store = Arc::new(RecetaStore::new());
        let session = Arc::new(FormSession::new(store));

        let gated = Arc::new(GatedClient::new(stored(1)));
        let first = {
            let session = Arc::clone(&session);
            let gated = Arc::clone(&gated);
            tokio::spawn(async move { session.submit(gated.as_ref()).await })
        };

        for _ in 0..100 {
            if session.is_submitting() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(session.is_submitting());

        first.abort();
        let join = first.await;
        assert!(join.is_err());
        assert!(!session.is_submitting());

        // The form is usable again after the cancellation.
        let result = session.submit(&MockClient::echoing(2)).await;
        assert!(result.is_ok());
    }
}

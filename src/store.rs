//! Shared saved-recetas collection.
//!
//! The application-wide container the form appends confirmed records to and
//! the list view reads from. Handed to collaborators as `Arc<RecetaStore>`;
//! interior mutability so unrelated parts of the app can append while the
//! form holds its handle. Append-only from this crate's point of view.

use std::sync::RwLock;

use crate::models::StoredReceta;

#[derive(Debug, Default)]
pub struct RecetaStore {
    recetas: RwLock<Vec<StoredReceta>>,
}

impl RecetaStore {
    pub fn new() -> Self {
        Self {
            recetas: RwLock::new(Vec::new()),
        }
    }

    /// Append one confirmed record. Existing entries are never replaced or
    /// reordered.
    pub fn append(&self, receta: StoredReceta) {
        if let Ok(mut recetas) = self.recetas.write() {
            recetas.push(receta);
        }
    }

    /// Snapshot of the saved records in append order. Empty when none.
    pub fn current(&self) -> Vec<StoredReceta> {
        self.recetas.read().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.recetas.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

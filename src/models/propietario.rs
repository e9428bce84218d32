use serde::{Deserialize, Serialize};

use super::Mascota;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propietario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
}

/// Creation payload for `POST /propietarios`. Presence is checked by the
/// handler so missing fields get a real message, not a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NuevoPropietario {
    pub nombre: Option<String>,
    pub email: Option<String>,
}

/// Owner plus their registered pets, as served by the directory listing.
#[derive(Debug, Clone, Serialize)]
pub struct PropietarioView {
    #[serde(flatten)]
    pub propietario: Propietario,
    pub mascotas: Vec<Mascota>,
}

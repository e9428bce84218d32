use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veterinario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
}

/// Creation payload for `POST /veterinarios`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NuevoVeterinario {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
}

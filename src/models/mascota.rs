use serde::{Deserialize, Serialize};

use super::Propietario;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mascota {
    pub id: i64,
    pub nombre: String,
    pub especie: String,
    pub raza: Option<String>,
    pub edad: Option<i64>,
    pub peso: Option<i64>,
    pub sexo: Option<String>,
    pub propietario_id: i64,
}

/// Creation payload for `POST /mascotas`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NuevaMascota {
    pub nombre: Option<String>,
    pub especie: Option<String>,
    pub raza: Option<String>,
    pub edad: Option<i64>,
    pub peso: Option<i64>,
    pub sexo: Option<String>,
    pub propietario_id: Option<i64>,
}

/// Pet plus its owner summary, as served by the directory listing.
#[derive(Debug, Clone, Serialize)]
pub struct MascotaView {
    #[serde(flatten)]
    pub mascota: Mascota,
    pub propietario: Propietario,
}

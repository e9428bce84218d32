//! Prescription record shapes: the draft the form edits field by field,
//! and the stored record the service hands back once saved.

use serde::{Deserialize, Serialize};

/// One veterinary prescription record at the form boundary.
///
/// Every field is a string: numeric and date values originate from text
/// inputs and are sent to the service unchanged. Wire names are camelCase
/// Spanish; the service contract predates this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receta {
    pub nombre_mascota: String,
    pub edad: String,
    pub peso: String,
    pub raza: String,
    pub sexo: String,
    pub propietario: String,
    pub fecha: String,
    pub diagnostico: String,
    pub tratamiento: String,
    pub veterinario: String,
}

/// Form fields, one per input, in display order.
///
/// Edits go through this enum so a mistyped field name is a compile error
/// rather than a silently dropped keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecetaField {
    NombreMascota,
    Edad,
    Peso,
    Raza,
    Sexo,
    Propietario,
    Fecha,
    Diagnostico,
    Tratamiento,
    Veterinario,
}

impl RecetaField {
    /// All ten fields in display order.
    pub const ALL: [RecetaField; 10] = [
        RecetaField::NombreMascota,
        RecetaField::Edad,
        RecetaField::Peso,
        RecetaField::Raza,
        RecetaField::Sexo,
        RecetaField::Propietario,
        RecetaField::Fecha,
        RecetaField::Diagnostico,
        RecetaField::Tratamiento,
        RecetaField::Veterinario,
    ];

    /// JSON name of this field on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RecetaField::NombreMascota => "nombreMascota",
            RecetaField::Edad => "edad",
            RecetaField::Peso => "peso",
            RecetaField::Raza => "raza",
            RecetaField::Sexo => "sexo",
            RecetaField::Propietario => "propietario",
            RecetaField::Fecha => "fecha",
            RecetaField::Diagnostico => "diagnostico",
            RecetaField::Tratamiento => "tratamiento",
            RecetaField::Veterinario => "veterinario",
        }
    }
}

impl Receta {
    /// Overwrite one field. Last write wins; no validation at this layer.
    pub fn set(&mut self, field: RecetaField, value: &str) {
        *self.field_mut(field) = value.to_string();
    }

    /// Current value of one field.
    pub fn get(&self, field: RecetaField) -> &str {
        match field {
            RecetaField::NombreMascota => &self.nombre_mascota,
            RecetaField::Edad => &self.edad,
            RecetaField::Peso => &self.peso,
            RecetaField::Raza => &self.raza,
            RecetaField::Sexo => &self.sexo,
            RecetaField::Propietario => &self.propietario,
            RecetaField::Fecha => &self.fecha,
            RecetaField::Diagnostico => &self.diagnostico,
            RecetaField::Tratamiento => &self.tratamiento,
            RecetaField::Veterinario => &self.veterinario,
        }
    }

    fn field_mut(&mut self, field: RecetaField) -> &mut String {
        match field {
            RecetaField::NombreMascota => &mut self.nombre_mascota,
            RecetaField::Edad => &mut self.edad,
            RecetaField::Peso => &mut self.peso,
            RecetaField::Raza => &mut self.raza,
            RecetaField::Sexo => &mut self.sexo,
            RecetaField::Propietario => &mut self.propietario,
            RecetaField::Fecha => &mut self.fecha,
            RecetaField::Diagnostico => &mut self.diagnostico,
            RecetaField::Tratamiento => &mut self.tratamiento,
            RecetaField::Veterinario => &mut self.veterinario,
        }
    }

    /// Wire names of required fields that are still empty.
    /// `raza` is the only optional field.
    pub fn missing_required(&self) -> Vec<&'static str> {
        RecetaField::ALL
            .iter()
            .filter(|f| !matches!(f, RecetaField::Raza))
            .filter(|f| self.get(**f).trim().is_empty())
            .map(|f| f.wire_name())
            .collect()
    }
}

/// A record as confirmed by the service: the submitted fields plus the
/// assigned id. This exact body is what the saved-records store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReceta {
    pub id: i64,
    #[serde(flatten)]
    pub receta: Receta,
}

/// Sex of the animal, as offered by the form's select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sexo {
    Macho,
    Hembra,
}

impl Sexo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sexo::Macho => "Macho",
            Sexo::Hembra => "Hembra",
        }
    }

    /// The options a frontend should offer, in display order.
    pub fn options() -> &'static [Sexo] {
        &[Sexo::Macho, Sexo::Hembra]
    }
}

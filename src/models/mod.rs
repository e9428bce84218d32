//! Entity shapes shared by the form core and the records service.

pub mod mascota;
pub mod propietario;
pub mod receta;
pub mod veterinario;

pub use mascota::{Mascota, MascotaView, NuevaMascota};
pub use propietario::{NuevoPropietario, Propietario, PropietarioView};
pub use receta::{Receta, RecetaField, Sexo, StoredReceta};
pub use veterinario::{NuevoVeterinario, Veterinario};

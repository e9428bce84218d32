//! API endpoint handlers.
//!
//! One module per resource. Handlers validate input, open a connection
//! through the shared context, and delegate to the repository.

pub mod health;
pub mod mascotas;
pub mod propietarios;
pub mod recetas;
pub mod veterinarios;

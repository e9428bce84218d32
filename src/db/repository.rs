use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::DatabaseError;
use crate::models::{Mascota, Propietario, Receta, StoredReceta, Veterinario};

// ═══════════════════════════════════════════
// Recetas
// ═══════════════════════════════════════════

/// Persist one submitted receta and return it with the assigned id.
pub fn insert_receta(conn: &Connection, receta: &Receta) -> Result<StoredReceta, DatabaseError> {
    conn.execute(
        "INSERT INTO recetas (nombre_mascota, edad, peso, raza, sexo, propietario,
         fecha, diagnostico, tratamiento, veterinario)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            receta.nombre_mascota,
            receta.edad,
            receta.peso,
            receta.raza,
            receta.sexo,
            receta.propietario,
            receta.fecha,
            receta.diagnostico,
            receta.tratamiento,
            receta.veterinario,
        ],
    )?;

    Ok(StoredReceta {
        id: conn.last_insert_rowid(),
        receta: receta.clone(),
    })
}

/// Fetch recetas in insertion order, optionally bounded by fecha
/// (inclusive on both ends). fecha is stored as ISO text, so the bounds
/// compare lexicographically.
pub fn fetch_recetas_filtered(
    conn: &Connection,
    fecha_inicio: Option<NaiveDate>,
    fecha_fin: Option<NaiveDate>,
) -> Result<Vec<StoredReceta>, DatabaseError> {
    let mut sql = String::from(
        "SELECT id, nombre_mascota, edad, peso, raza, sexo, propietario,
                fecha, diagnostico, tratamiento, veterinario
         FROM recetas
         WHERE 1=1",
    );

    let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
    let mut param_idx = 1u32;

    if let Some(inicio) = fecha_inicio {
        sql.push_str(&format!(" AND fecha >= ?{param_idx}"));
        params_vec.push(Box::new(inicio));
        param_idx += 1;
    }
    if let Some(fin) = fecha_fin {
        sql.push_str(&format!(" AND fecha <= ?{param_idx}"));
        params_vec.push(Box::new(fin));
        param_idx += 1;
    }
    let _ = param_idx; // suppress unused warning

    sql.push_str(" ORDER BY id");

    let param_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(param_refs.as_slice(), |row| {
        Ok(StoredReceta {
            id: row.get(0)?,
            receta: Receta {
                nombre_mascota: row.get(1)?,
                edad: row.get(2)?,
                peso: row.get(3)?,
                raza: row.get(4)?,
                sexo: row.get(5)?,
                propietario: row.get(6)?,
                fecha: row.get(7)?,
                diagnostico: row.get(8)?,
                tratamiento: row.get(9)?,
                veterinario: row.get(10)?,
            },
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// ═══════════════════════════════════════════
// Propietarios
// ═══════════════════════════════════════════

pub fn insert_propietario(
    conn: &Connection,
    nombre: &str,
    email: &str,
) -> Result<Propietario, DatabaseError> {
    conn.execute(
        "INSERT INTO propietarios (nombre, email) VALUES (?1, ?2)",
        params![nombre, email],
    )?;

    Ok(Propietario {
        id: conn.last_insert_rowid(),
        nombre: nombre.to_string(),
        email: email.to_string(),
    })
}

pub fn propietario_email_exists(conn: &Connection, email: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM propietarios WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn get_propietario(conn: &Connection, id: i64) -> Result<Option<Propietario>, DatabaseError> {
    let propietario = conn
        .query_row(
            "SELECT id, nombre, email FROM propietarios WHERE id = ?1",
            params![id],
            |row| {
                Ok(Propietario {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    email: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(propietario)
}

pub fn get_all_propietarios(conn: &Connection) -> Result<Vec<Propietario>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, nombre, email FROM propietarios ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(Propietario {
            id: row.get(0)?,
            nombre: row.get(1)?,
            email: row.get(2)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// ═══════════════════════════════════════════
// Veterinarios
// ═══════════════════════════════════════════

pub fn insert_veterinario(
    conn: &Connection,
    nombre: &str,
    email: &str,
    telefono: Option<&str>,
) -> Result<Veterinario, DatabaseError> {
    conn.execute(
        "INSERT INTO veterinarios (nombre, email, telefono) VALUES (?1, ?2, ?3)",
        params![nombre, email, telefono],
    )?;

    Ok(Veterinario {
        id: conn.last_insert_rowid(),
        nombre: nombre.to_string(),
        email: email.to_string(),
        telefono: telefono.map(|t| t.to_string()),
    })
}

pub fn veterinario_email_exists(conn: &Connection, email: &str) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM veterinarios WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn get_all_veterinarios(conn: &Connection) -> Result<Vec<Veterinario>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, nombre, email, telefono FROM veterinarios ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(Veterinario {
            id: row.get(0)?,
            nombre: row.get(1)?,
            email: row.get(2)?,
            telefono: row.get(3)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// ═══════════════════════════════════════════
// Mascotas
// ═══════════════════════════════════════════

#[allow(clippy::too_many_arguments)]
pub fn insert_mascota(
    conn: &Connection,
    nombre: &str,
    especie: &str,
    raza: Option<&str>,
    edad: Option<i64>,
    peso: Option<i64>,
    sexo: Option<&str>,
    propietario_id: i64,
) -> Result<Mascota, DatabaseError> {
    conn.execute(
        "INSERT INTO mascotas (nombre, especie, raza, edad, peso, sexo, propietario_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![nombre, especie, raza, edad, peso, sexo, propietario_id],
    )?;

    Ok(Mascota {
        id: conn.last_insert_rowid(),
        nombre: nombre.to_string(),
        especie: especie.to_string(),
        raza: raza.map(|r| r.to_string()),
        edad,
        peso,
        sexo: sexo.map(|s| s.to_string()),
        propietario_id,
    })
}

pub fn get_all_mascotas(conn: &Connection) -> Result<Vec<Mascota>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, nombre, especie, raza, edad, peso, sexo, propietario_id
         FROM mascotas ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Mascota {
            id: row.get(0)?,
            nombre: row.get(1)?,
            especie: row.get(2)?,
            raza: row.get(3)?,
            edad: row.get(4)?,
            peso: row.get(5)?,
            sexo: row.get(6)?,
            propietario_id: row.get(7)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn mascotas_de_propietario(
    conn: &Connection,
    propietario_id: i64,
) -> Result<Vec<Mascota>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, nombre, especie, raza, edad, peso, sexo, propietario_id
         FROM mascotas WHERE propietario_id = ?1 ORDER BY id",
    )?;

    let rows = stmt.query_map(params![propietario_id], |row| {
        Ok(Mascota {
            id: row.get(0)?,
            nombre: row.get(1)?,
            especie: row.get(2)?,
            raza: row.get(3)?,
            edad: row.get(4)?,
            peso: row.get(5)?,
            sexo: row.get(6)?,
            propietario_id: row.get(7)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

//! Saved-recetas list rendering.
//!
//! Pure view shaping: stored records in, one renderable card per record
//! out, in input order. No state, no I/O. Rendering the same input twice
//! yields the same cards, and an absent input is a valid empty list.

use serde::Serialize;

use crate::models::StoredReceta;

/// Heading of the saved-records section. Rendered even when the list is
/// empty or absent.
pub const SECTION_TITLE: &str = "Recetas Guardadas";

/// One rendered list item: pet name as the title, the remaining nine
/// fields as labeled lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecetaCard {
    pub id: i64,
    pub title: String,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub label: &'static str,
    pub value: String,
}

/// Render saved records as list cards, lazily and in input order.
///
/// `None` renders as zero cards. Re-invoking restarts from the first
/// record.
pub fn render(recetas: Option<&[StoredReceta]>) -> impl Iterator<Item = RecetaCard> + '_ {
    recetas.unwrap_or_default().iter().map(card)
}

fn card(stored: &StoredReceta) -> RecetaCard {
    let receta = &stored.receta;
    RecetaCard {
        id: stored.id,
        title: receta.nombre_mascota.clone(),
        lines: vec![
            Line {
                label: "Edad",
                value: format!("{} años", receta.edad),
            },
            Line {
                label: "Peso",
                value: format!("{} kg", receta.peso),
            },
            Line {
                label: "Raza",
                value: receta.raza.clone(),
            },
            Line {
                label: "Sexo",
                value: receta.sexo.clone(),
            },
            Line {
                label: "Propietario",
                value: receta.propietario.clone(),
            },
            Line {
                label: "Fecha",
                value: receta.fecha.clone(),
            },
            Line {
                label: "Diagnóstico",
                value: receta.diagnostico.clone(),
            },
            Line {
                label: "Tratamiento",
                value: receta.tratamiento.clone(),
            },
            Line {
                label: "Veterinario",
                value: receta.veterinario.clone(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Receta;

    fn rex(id: i64) -> StoredReceta {
        StoredReceta {
            id,
            receta: Receta {
                nombre_mascota: "Rex".into(),
                edad: "3".into(),
                peso: "12".into(),
                raza: "Labrador".into(),
                sexo: "Macho".into(),
                propietario: "Ana".into(),
                fecha: "2024-05-01".into(),
                diagnostico: "Otitis".into(),
                tratamiento: "Gotas".into(),
                veterinario: "Dr. Lee".into(),
            },
        }
    }

    #[test]
    fn absent_input_renders_no_cards() {
        assert_eq!(render(None).count(), 0);
        assert_eq!(SECTION_TITLE, "Recetas Guardadas");
    }

    #[test]
    fn empty_input_renders_no_cards() {
        assert_eq!(render(Some(&[])).count(), 0);
    }

    #[test]
    fn one_card_per_record_in_input_order() {
        let records = vec![rex(1), rex(2), rex(3)];
        let ids: Vec<i64> = render(Some(&records)).map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn card_shows_all_ten_fields_in_fixed_order() {
        let records = vec![rex(7)];
        let cards: Vec<RecetaCard> = render(Some(&records)).collect();
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.title, "Rex");

        let labels: Vec<&str> = card.lines.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Edad",
                "Peso",
                "Raza",
                "Sexo",
                "Propietario",
                "Fecha",
                "Diagnóstico",
                "Tratamiento",
                "Veterinario",
            ]
        );

        assert_eq!(card.lines[0].value, "3 años");
        assert_eq!(card.lines[1].value, "12 kg");
        assert_eq!(card.lines[5].value, "2024-05-01");
        assert_eq!(card.lines[8].value, "Dr. Lee");
    }

    #[test]
    fn rendering_is_referentially_transparent() {
        let records = vec![rex(1), rex(2)];
        let first: Vec<RecetaCard> = render(Some(&records)).collect();
        let second: Vec<RecetaCard> = render(Some(&records)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn renders_whatever_the_session_exposes() {
        use std::sync::Arc;

        use crate::form::FormSession;
        use crate::store::RecetaStore;

        let store = Arc::new(RecetaStore::new());
        let session = FormSession::new(Arc::clone(&store));
        store.append(rex(1));

        // Hidden session exposes nothing to render.
        assert_eq!(render(session.saved_recetas().as_deref()).count(), 0);

        session.toggle_saved();
        let cards: Vec<RecetaCard> = render(session.saved_recetas().as_deref()).collect();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Rex");
    }
}

//! Request-boundary facade over the [`Directory`].
//!
//! [`QueryService`] takes raw path parameters, validates them as
//! identifiers, and performs the lookup. The result separates three
//! outcomes:
//!
//! - `Err(QueryError::InvalidId)` -- the parameter is malformed (client error)
//! - `Ok(None)` -- well-formed, but nothing matches (not found)
//! - `Ok(Some(..))` -- found
//!
//! A miss is a normal result and is never reported as an error.

use std::sync::Arc;

use colitas_types::{Animal, AnimalId, AnimalListing, Shelter, ShelterId, Veterinary};
use tracing::debug;

use crate::error::QueryError;
use crate::store::Directory;

/// An animal found by [`QueryService::animal`], together with its shelter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalMatch<'a> {
    /// The shelter hosting the animal.
    pub shelter: &'a Shelter,
    /// The animal itself.
    pub animal: &'a Animal,
}

/// Thin, cloneable query facade shared by all request handlers.
#[derive(Debug, Clone)]
pub struct QueryService {
    directory: Arc<Directory>,
}

impl QueryService {
    /// Wrap a loaded directory.
    pub const fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    /// The underlying directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Look up a shelter by its raw path parameter.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidId`] if `raw_id` is not a well-formed
    /// shelter ID.
    pub fn shelter(&self, raw_id: &str) -> Result<Option<&Shelter>, QueryError> {
        let id = ShelterId::parse(raw_id)?;
        let found = self.directory.find_shelter(&id);
        if found.is_none() {
            debug!(shelter_id = %id, "Shelter not found");
        }
        Ok(found)
    }

    /// Look up an animal within a shelter by raw path parameters.
    ///
    /// Both IDs are validated before any lookup happens. The result is
    /// `None` when the shelter is unknown or does not host the animal.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidId`] if either parameter is malformed.
    pub fn animal(
        &self,
        raw_shelter_id: &str,
        raw_animal_id: &str,
    ) -> Result<Option<AnimalMatch<'_>>, QueryError> {
        let shelter_id = ShelterId::parse(raw_shelter_id)?;
        let animal_id = AnimalId::parse(raw_animal_id)?;

        let found = self
            .directory
            .find_shelter(&shelter_id)
            .zip(self.directory.find_animal(&shelter_id, &animal_id))
            .map(|(shelter, animal)| AnimalMatch { shelter, animal });

        if found.is_none() {
            debug!(shelter_id = %shelter_id, animal_id = %animal_id, "Animal not found");
        }
        Ok(found)
    }

    /// All shelters in load order.
    pub fn shelters(&self) -> &[Shelter] {
        self.directory.shelters()
    }

    /// All animals, each annotated with its shelter summary.
    pub fn animals(&self) -> Vec<AnimalListing<'_>> {
        self.directory.animals_flattened()
    }

    /// All veterinary clinics in load order.
    pub fn veterinarias(&self) -> &[Veterinary] {
        self.directory.veterinarias()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::loader::from_json_str;

    fn service() -> QueryService {
        let shelters = r#"[
            {
                "id": "s1", "nombre": "Uno", "ubicacion": "Loja", "mision": "m",
                "contacto": { "email": "uno@example.org", "telefono": "1" },
                "animalesParaAdopcion": [ { "id": "a1", "nombre": "Rex", "especie": "Perro" } ]
            },
            {
                "id": "s2", "nombre": "Dos", "ubicacion": "Ambato", "mision": "m",
                "contacto": { "email": "dos@example.org", "telefono": "2" },
                "animalesParaAdopcion": [ { "id": "a2", "nombre": "Mishi", "especie": "Gato" } ]
            }
        ]"#;
        QueryService::new(Arc::new(from_json_str(shelters, "[]").unwrap()))
    }

    #[test]
    fn finds_rex_in_s1() {
        let svc = service();
        let hit = svc.animal("s1", "a1").unwrap().unwrap();
        assert_eq!(hit.animal.name, "Rex");
        assert_eq!(hit.shelter.id.as_str(), "s1");
    }

    #[test]
    fn misses_are_not_errors() {
        let svc = service();
        assert_eq!(svc.animal("s1", "a99"), Ok(None));
        assert_eq!(svc.animal("s99", "a1"), Ok(None));
        assert_eq!(svc.shelter("unknown-id"), Ok(None));
    }

    #[test]
    fn never_returns_an_animal_from_another_shelter() {
        let svc = service();
        assert_eq!(svc.animal("s1", "a2"), Ok(None));
        assert!(svc.animal("s2", "a2").unwrap().is_some());
    }

    #[test]
    fn malformed_ids_are_client_errors() {
        let svc = service();
        assert!(matches!(svc.shelter(" "), Err(QueryError::InvalidId(e)) if e.kind == "shelter"));
        assert!(matches!(svc.animal("s1", ""), Err(QueryError::InvalidId(e)) if e.kind == "animal"));
        // Validation happens before lookup, even for unknown shelters.
        assert!(svc.animal("s99", "").is_err());
    }

    #[test]
    fn listings_pass_through() {
        let svc = service();
        assert_eq!(svc.shelters().len(), 2);
        assert_eq!(svc.animals().len(), 2);
        assert!(svc.veterinarias().is_empty());
        assert_eq!(svc.directory().animal_count(), 2);
    }
}

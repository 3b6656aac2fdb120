//! The in-memory directory store.
//!
//! [`Directory`] owns every shelter (with its animals) and every veterinary
//! clinic for the lifetime of the process. It is built once by the loader
//! and never mutated afterwards, so it can be shared behind an `Arc` and
//! read from any number of request handlers without locking.
//!
//! # Indexing
//!
//! Records are kept in load order for the listing endpoints. Alongside the
//! ordered vectors, a hash index maps each [`ShelterId`] to its position and
//! to a per-shelter index of its animals, making both ID lookups O(1).
//! Animal IDs are only unique within a shelter, so there is deliberately no
//! global animal index.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use colitas_types::{Animal, AnimalId, AnimalListing, Shelter, ShelterId, ShelterSummary, Veterinary};

use crate::error::LoadError;

/// Index entry for a single shelter.
#[derive(Debug, Clone, Default)]
struct ShelterSlot {
    /// Position of the shelter in [`Directory::shelters`].
    position: usize,
    /// Position of each animal in the shelter's own animal list.
    animals: HashMap<AnimalId, usize>,
}

/// Immutable, indexed holder of all loaded directory records.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    shelters: Vec<Shelter>,
    shelter_index: HashMap<ShelterId, ShelterSlot>,
    veterinarias: Vec<Veterinary>,
}

impl Directory {
    /// Build a directory from parsed records, indexing them by ID.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DuplicateShelterId`] if two shelters share an
    /// ID, or [`LoadError::DuplicateAnimalId`] if two animals of the same
    /// shelter do.
    pub fn new(shelters: Vec<Shelter>, veterinarias: Vec<Veterinary>) -> Result<Self, LoadError> {
        let mut shelter_index = HashMap::with_capacity(shelters.len());

        for (position, shelter) in shelters.iter().enumerate() {
            let mut animals = HashMap::with_capacity(shelter.animals.len());
            for (animal_position, animal) in shelter.animals.iter().enumerate() {
                if animals.insert(animal.id.clone(), animal_position).is_some() {
                    return Err(LoadError::DuplicateAnimalId {
                        shelter_id: shelter.id.clone(),
                        animal_id: animal.id.clone(),
                    });
                }
            }

            match shelter_index.entry(shelter.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(LoadError::DuplicateShelterId {
                        id: shelter.id.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(ShelterSlot { position, animals });
                }
            }
        }

        Ok(Self {
            shelters,
            shelter_index,
            veterinarias,
        })
    }

    /// Look up a shelter by ID.
    pub fn find_shelter(&self, id: &ShelterId) -> Option<&Shelter> {
        self.shelter_index
            .get(id)
            .and_then(|slot| self.shelters.get(slot.position))
    }

    /// Look up an animal within a specific shelter.
    ///
    /// Returns `None` if the shelter does not exist, or if it exists but
    /// hosts no animal with that ID. Other shelters are never searched.
    pub fn find_animal(&self, shelter_id: &ShelterId, animal_id: &AnimalId) -> Option<&Animal> {
        let slot = self.shelter_index.get(shelter_id)?;
        let shelter = self.shelters.get(slot.position)?;
        let animal_position = slot.animals.get(animal_id)?;
        shelter.animals.get(*animal_position)
    }

    /// All shelters in load order.
    pub fn shelters(&self) -> &[Shelter] {
        &self.shelters
    }

    /// Every animal across all shelters, each paired with a summary of its
    /// owning shelter.
    ///
    /// Shelters are visited in load order and animals in their shelter's
    /// order. The listing is computed on each call.
    pub fn animals_flattened(&self) -> Vec<AnimalListing<'_>> {
        let mut listings = Vec::with_capacity(self.animal_count());
        for shelter in &self.shelters {
            let summary = ShelterSummary::from(shelter);
            listings.extend(shelter.animals.iter().map(|animal| AnimalListing {
                animal,
                shelter: summary.clone(),
            }));
        }
        listings
    }

    /// All veterinary clinics in load order.
    pub fn veterinarias(&self) -> &[Veterinary] {
        &self.veterinarias
    }

    /// Number of shelters.
    pub fn shelter_count(&self) -> usize {
        self.shelters.len()
    }

    /// Number of animals across all shelters.
    pub fn animal_count(&self) -> usize {
        self.shelters.iter().map(|s| s.animals.len()).sum()
    }

    /// Number of veterinary clinics.
    pub fn veterinaria_count(&self) -> usize {
        self.veterinarias.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use colitas_types::{ContactInfo, VeterinaryId};

    use super::*;

    fn contact() -> ContactInfo {
        ContactInfo {
            email: String::from("info@example.org"),
            phone: String::from("000"),
            social_links: Vec::new(),
        }
    }

    fn animal(id: &str, name: &str) -> Animal {
        Animal {
            id: AnimalId::parse(id).unwrap(),
            name: name.to_owned(),
            species: String::from("Perro"),
            breed: None,
            age: None,
            size: None,
            color: None,
            sex: None,
            microchip: None,
            health_status: None,
            medical_history: Vec::new(),
            story: None,
            current_situation: None,
            photo_url: None,
        }
    }

    fn shelter(id: &str, animals: Vec<Animal>) -> Shelter {
        Shelter {
            id: ShelterId::parse(id).unwrap(),
            name: format!("Albergue {id}"),
            location: format!("Ciudad {id}"),
            mission: String::from("Rescatar."),
            verified: false,
            contact: contact(),
            urgent_needs: Vec::new(),
            animals,
        }
    }

    fn vet(id: &str) -> Veterinary {
        Veterinary {
            id: VeterinaryId::parse(id).unwrap(),
            name: format!("Clínica {id}"),
            location: String::from("Lima"),
            contact: contact(),
        }
    }

    fn sid(raw: &str) -> ShelterId {
        ShelterId::parse(raw).unwrap()
    }

    fn aid(raw: &str) -> AnimalId {
        AnimalId::parse(raw).unwrap()
    }

    fn sample() -> Directory {
        Directory::new(
            vec![
                shelter("s1", vec![animal("a1", "Rex"), animal("a2", "Luna")]),
                shelter(
                    "s2",
                    vec![animal("a1", "Toby"), animal("b2", "Mia"), animal("b3", "Kira")],
                ),
            ],
            vec![vet("v1"), vet("v2")],
        )
        .unwrap()
    }

    #[test]
    fn find_shelter_returns_each_loaded_record() {
        let dir = sample();
        for s in dir.shelters() {
            assert_eq!(dir.find_shelter(&s.id), Some(s));
        }
        assert!(dir.find_shelter(&sid("s99")).is_none());
    }

    #[test]
    fn find_animal_is_scoped_to_its_shelter() {
        let dir = sample();

        let rex = dir.find_animal(&sid("s1"), &aid("a1")).unwrap();
        assert_eq!(rex.name, "Rex");

        // Same animal ID in another shelter resolves to that shelter's animal.
        let toby = dir.find_animal(&sid("s2"), &aid("a1")).unwrap();
        assert_eq!(toby.name, "Toby");

        assert!(dir.find_animal(&sid("s1"), &aid("a99")).is_none());
        assert!(dir.find_animal(&sid("s99"), &aid("a1")).is_none());
        // b2 exists, but not in s1.
        assert!(dir.find_animal(&sid("s1"), &aid("b2")).is_none());
    }

    #[test]
    fn flattened_listing_covers_every_animal_once() {
        let dir = sample();
        let listings = dir.animals_flattened();

        let expected: usize = dir.shelters().iter().map(|s| s.animals.len()).sum();
        assert_eq!(listings.len(), expected);
        assert_eq!(listings.len(), 5);
        assert_eq!(dir.animal_count(), 5);

        for listing in &listings {
            let owner = dir.find_shelter(&listing.shelter.id).unwrap();
            assert!(owner.animals.iter().any(|a| std::ptr::eq(a, listing.animal)));
            assert_eq!(listing.shelter.name, owner.name);
            assert_eq!(listing.shelter.location, owner.location);
        }

        let names: Vec<&str> = listings.iter().map(|l| l.animal.name.as_str()).collect();
        assert_eq!(names, ["Rex", "Luna", "Toby", "Mia", "Kira"]);
    }

    #[test]
    fn reads_are_idempotent() {
        let dir = sample();
        assert_eq!(dir.animals_flattened(), dir.animals_flattened());
        assert_eq!(
            dir.find_animal(&sid("s2"), &aid("b3")),
            dir.find_animal(&sid("s2"), &aid("b3"))
        );
        assert_eq!(dir.shelters(), dir.shelters());
    }

    #[test]
    fn preserves_load_order() {
        let dir = sample();
        let ids: Vec<&str> = dir.shelters().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2"]);

        let vets: Vec<&str> = dir.veterinarias().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(vets, ["v1", "v2"]);
        assert_eq!(dir.veterinaria_count(), 2);
    }

    #[test]
    fn rejects_duplicate_shelter_ids() {
        let result = Directory::new(
            vec![shelter("s1", Vec::new()), shelter("s1", Vec::new())],
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(LoadError::DuplicateShelterId { id }) if id.as_str() == "s1"
        ));
    }

    #[test]
    fn rejects_duplicate_animal_ids_within_a_shelter() {
        let result = Directory::new(
            vec![shelter("s1", vec![animal("a1", "Rex"), animal("a1", "Otro")])],
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(LoadError::DuplicateAnimalId { animal_id, .. }) if animal_id.as_str() == "a1"
        ));
    }

    #[test]
    fn empty_directory_has_no_records() {
        let dir = Directory::default();
        assert_eq!(dir.shelter_count(), 0);
        assert!(dir.animals_flattened().is_empty());
        assert!(dir.find_shelter(&sid("s1")).is_none());
    }
}

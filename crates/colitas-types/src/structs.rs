//! Directory record structs: shelters, their animals, and veterinary clinics.
//!
//! The JSON field names are the Spanish keys used by the directory's data
//! files (`nombre`, `ubicacion`, `animalesParaAdopcion`, ...). Rust field
//! names are English; `serde` renames bridge the two so existing data files
//! load unchanged.
//!
//! Structural checks (required keys, non-blank IDs) happen during
//! deserialization. Field checks (non-empty names, email syntax) are
//! declared with [`validator`] and run by the loader after parsing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use crate::ids::{AnimalId, ShelterId, VeterinaryId};

// ---------------------------------------------------------------------------
// Contact info
// ---------------------------------------------------------------------------

/// How to reach a shelter or clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[ts(export, export_to = "bindings/")]
pub struct ContactInfo {
    /// Contact email address.
    #[validate(email)]
    pub email: String,
    /// Contact phone number, free-form.
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Social-media profile URLs, in display order.
    #[serde(rename = "redesSociales")]
    #[serde(default)]
    pub social_links: Vec<String>,
}

// ---------------------------------------------------------------------------
// Animal
// ---------------------------------------------------------------------------

/// An adoptable animal hosted by exactly one shelter.
///
/// Only `id`, `nombre` and `especie` are required; the remaining
/// descriptive fields are optional because shelters publish very uneven
/// detail about their animals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[ts(export, export_to = "bindings/")]
pub struct Animal {
    /// Identifier, unique within the owning shelter.
    pub id: AnimalId,
    /// The animal's name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1))]
    pub name: String,
    /// Species (dog, cat, ...).
    #[serde(rename = "especie")]
    #[validate(length(min = 1))]
    pub species: String,
    /// Breed, if known.
    #[serde(rename = "raza")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub breed: Option<String>,
    /// Approximate age, free-form (e.g. "2 años").
    #[serde(rename = "edad")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub age: Option<String>,
    /// Size class.
    #[serde(rename = "tamano")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub size: Option<String>,
    /// Coat color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color: Option<String>,
    /// Sex.
    #[serde(rename = "sexo")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub sex: Option<String>,
    /// Microchip number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub microchip: Option<String>,
    /// Current health status.
    #[serde(rename = "estadoSalud")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub health_status: Option<String>,
    /// Vaccinations and operations, in chronological order.
    #[serde(rename = "historialMedico")]
    #[serde(default)]
    pub medical_history: Vec<String>,
    /// The animal's story. Older data files call this `descripcion`.
    #[serde(rename = "historia")]
    #[serde(alias = "descripcion")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub story: Option<String>,
    /// Note on the animal's current situation.
    #[serde(rename = "situacionActual")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub current_situation: Option<String>,
    /// Photo URL.
    #[serde(rename = "fotoURL")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub photo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Shelter
// ---------------------------------------------------------------------------

/// An organization hosting animals awaiting adoption.
///
/// A shelter exclusively owns its animal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[ts(export, export_to = "bindings/")]
pub struct Shelter {
    /// Identifier, unique across the directory.
    pub id: ShelterId,
    /// Display name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1))]
    pub name: String,
    /// City or address.
    #[serde(rename = "ubicacion")]
    #[validate(length(min = 1))]
    pub location: String,
    /// Mission statement.
    #[serde(rename = "mision")]
    pub mission: String,
    /// Whether the directory has verified this shelter.
    #[serde(rename = "verificado")]
    #[serde(default)]
    pub verified: bool,
    /// Contact details.
    #[serde(rename = "contacto")]
    #[validate(nested)]
    pub contact: ContactInfo,
    /// Urgent needs, most pressing first.
    #[serde(rename = "necesidadesUrgentes")]
    #[serde(default)]
    pub urgent_needs: Vec<String>,
    /// Animals hosted by this shelter, in publication order.
    #[serde(rename = "animalesParaAdopcion")]
    #[serde(default)]
    #[validate(nested)]
    pub animals: Vec<Animal>,
}

/// The shelter projection embedded into flattened animal listings.
///
/// Carries only identity and location so listings stay small regardless of
/// how much a shelter publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShelterSummary {
    /// Shelter identifier.
    pub id: ShelterId,
    /// Shelter name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Shelter location.
    #[serde(rename = "ubicacion")]
    pub location: String,
}

impl From<&Shelter> for ShelterSummary {
    fn from(shelter: &Shelter) -> Self {
        Self {
            id: shelter.id.clone(),
            name: shelter.name.clone(),
            location: shelter.location.clone(),
        }
    }
}

/// One entry of the cross-shelter animal listing.
///
/// Serializes as the animal's own fields plus an `albergue` key holding the
/// owning shelter's [`ShelterSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalListing<'a> {
    /// The animal record, borrowed from the directory.
    #[serde(flatten)]
    pub animal: &'a Animal,
    /// Summary of the shelter that hosts the animal.
    #[serde(rename = "albergue")]
    pub shelter: ShelterSummary,
}

// ---------------------------------------------------------------------------
// Veterinary
// ---------------------------------------------------------------------------

/// A veterinary clinic listed in the directory.
///
/// Independent of shelters and animals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[ts(export, export_to = "bindings/")]
pub struct Veterinary {
    /// Clinic identifier.
    pub id: VeterinaryId,
    /// Clinic name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1))]
    pub name: String,
    /// Clinic location.
    #[serde(rename = "ubicacion")]
    #[validate(length(min = 1))]
    pub location: String,
    /// Contact details.
    #[serde(rename = "contacto")]
    #[validate(nested)]
    pub contact: ContactInfo,
}

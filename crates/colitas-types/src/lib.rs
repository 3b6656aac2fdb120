//! Shared record types for the Colitas Felices shelter directory.
//!
//! This crate is the single source of truth for the directory's data shapes.
//! Types defined here flow downstream to `TypeScript` via `ts-rs` for the
//! browser client that consumes the JSON API.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for shelter, animal and clinic IDs
//! - [`structs`] -- Shelter, animal, veterinary and listing records

pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::{AnimalId, InvalidId, ShelterId, VeterinaryId};
pub use structs::{Animal, AnimalListing, ContactInfo, Shelter, ShelterSummary, Veterinary};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // The files are written to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::ShelterId::export_all();
        let _ = crate::ids::AnimalId::export_all();
        let _ = crate::ids::VeterinaryId::export_all();

        // Records
        let _ = crate::structs::ContactInfo::export_all();
        let _ = crate::structs::Animal::export_all();
        let _ = crate::structs::Shelter::export_all();
        let _ = crate::structs::ShelterSummary::export_all();
        let _ = crate::structs::Veterinary::export_all();
    }
}

//! One-time loading of the directory data files.
//!
//! The loader reads the shelters file (shelters with embedded animals) and
//! the veterinarias file, decodes them into typed records, runs field
//! validation, and builds the indexed [`Directory`]. Any failure aborts the
//! whole load: there is no partially-loaded mode.
//!
//! Both files are a top-level JSON array of records.

use std::path::Path;

use colitas_types::{Shelter, Veterinary};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use validator::Validate;

use crate::error::LoadError;
use crate::store::Directory;

/// Origin labels used in errors for data passed in as strings.
const INLINE_SHELTERS: &str = "<inline shelters>";
const INLINE_VETERINARIAS: &str = "<inline veterinarias>";

/// Load and index both data files.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered: an unreadable file, invalid
/// JSON, a record failing validation, or a duplicate ID.
pub fn load_directory(shelters_path: &Path, veterinarias_path: &Path) -> Result<Directory, LoadError> {
    let shelters: Vec<Shelter> = load_records(shelters_path)?;
    let veterinarias: Vec<Veterinary> = load_records(veterinarias_path)?;

    let directory = Directory::new(shelters, veterinarias)?;

    info!(
        shelters_path = %shelters_path.display(),
        veterinarias_path = %veterinarias_path.display(),
        shelters = directory.shelter_count(),
        animals = directory.animal_count(),
        veterinarias = directory.veterinaria_count(),
        "Directory loaded"
    );

    Ok(directory)
}

/// Build a directory from JSON text already in memory.
///
/// # Errors
///
/// Same failure modes as [`load_directory`], minus I/O.
pub fn from_json_str(shelters_json: &str, veterinarias_json: &str) -> Result<Directory, LoadError> {
    let shelters: Vec<Shelter> = parse_records(shelters_json, INLINE_SHELTERS)?;
    let veterinarias: Vec<Veterinary> = parse_records(veterinarias_json, INLINE_VETERINARIAS)?;
    Directory::new(shelters, veterinarias)
}

/// Read a JSON array of records from disk.
fn load_records<T>(path: &Path) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned + Validate,
{
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        origin: origin.clone(),
        source,
    })?;
    debug!(origin = %origin, bytes = text.len(), "Read data file");
    parse_records(&text, &origin)
}

/// Decode and validate a JSON array of records.
fn parse_records<T>(text: &str, origin: &str) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned + Validate,
{
    let records: Vec<T> = serde_json::from_str(text).map_err(|source| LoadError::Parse {
        origin: origin.to_owned(),
        source,
    })?;

    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|source| LoadError::Invalid {
            origin: origin.to_owned(),
            index,
            source,
        })?;
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::path::PathBuf;

    use colitas_types::{AnimalId, ShelterId};

    use super::*;

    const SHELTERS: &str = r#"[
        {
            "id": "s1",
            "nombre": "Patitas",
            "ubicacion": "Cuenca",
            "mision": "Dar una segunda oportunidad.",
            "verificado": true,
            "contacto": {
                "email": "patitas@example.org",
                "telefono": "099 000 0000",
                "redesSociales": ["https://instagram.com/patitas"]
            },
            "necesidadesUrgentes": ["Alimento"],
            "animalesParaAdopcion": [
                { "id": "a1", "nombre": "Rex", "especie": "Perro" }
            ]
        }
    ]"#;

    const VETERINARIAS: &str = r#"[
        {
            "id": "v1",
            "nombre": "Clínica Norte",
            "ubicacion": "Cuenca",
            "contacto": { "email": "norte@example.org", "telefono": "072 000 000" }
        }
    ]"#;

    fn temp_dir(name: &str) -> PathBuf {
        let unique = format!(
            "colitas_loader_{name}_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        );
        let dir = std::env::temp_dir().join(unique);
        std::fs::create_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn loads_both_files_from_disk() {
        let dir = temp_dir("ok");
        let shelters = dir.join("albergues.json");
        let vets = dir.join("veterinarias.json");
        std::fs::write(&shelters, SHELTERS).unwrap();
        std::fs::write(&vets, VETERINARIAS).unwrap();

        let directory = load_directory(&shelters, &vets).unwrap();
        assert_eq!(directory.shelter_count(), 1);
        assert_eq!(directory.veterinaria_count(), 1);

        let rex = directory
            .find_animal(&ShelterId::parse("s1").unwrap(), &AnimalId::parse("a1").unwrap())
            .unwrap();
        assert_eq!(rex.name, "Rex");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn shipped_sample_data_loads() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let directory =
            load_directory(&data.join("albergues.json"), &data.join("veterinarias.json")).unwrap();

        assert_eq!(directory.shelter_count(), 3);
        assert_eq!(directory.animal_count(), 3);
        assert_eq!(directory.veterinaria_count(), 2);

        // `michi` is published with the legacy `descripcion` key.
        let michi = directory
            .find_animal(
                &ShelterId::parse("gatitos-del-sur").unwrap(),
                &AnimalId::parse("michi").unwrap(),
            )
            .unwrap();
        assert!(michi.story.is_some());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = temp_dir("missing");
        let result = load_directory(&dir.join("nope.json"), &dir.join("nope2.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = from_json_str("[{", VETERINARIAS);
        assert!(matches!(result, Err(LoadError::Parse { origin, .. }) if origin == INLINE_SHELTERS));
    }

    #[test]
    fn missing_required_field_fails_the_load() {
        let without_name = SHELTERS.replace(r#""nombre": "Patitas","#, "");
        assert!(matches!(
            from_json_str(&without_name, VETERINARIAS),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn blank_id_fails_the_load() {
        let blank_id = SHELTERS.replace(r#""id": "a1""#, r#""id": " ""#);
        assert!(matches!(
            from_json_str(&blank_id, VETERINARIAS),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_field_is_reported_with_record_index() {
        let bad_email = VETERINARIAS.replace("norte@example.org", "no-es-correo");
        let result = from_json_str(SHELTERS, &bad_email);
        assert!(matches!(
            result,
            Err(LoadError::Invalid { index: 0, origin, .. }) if origin == INLINE_VETERINARIAS
        ));
    }

    #[test]
    fn duplicate_shelter_ids_fail_the_load() {
        let inner = SHELTERS.trim().trim_start_matches('[').trim_end_matches(']');
        let doubled = format!("[{inner},{inner}]");
        assert!(matches!(
            from_json_str(&doubled, VETERINARIAS),
            Err(LoadError::DuplicateShelterId { .. })
        ));
    }

    #[test]
    fn empty_arrays_load_an_empty_directory() {
        let directory = from_json_str("[]", "[]").unwrap();
        assert_eq!(directory.shelter_count(), 0);
        assert_eq!(directory.veterinaria_count(), 0);
    }
}

use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::records::CinemaCatalog;
use crate::error::ExportError;

/// Render the catalog as pretty-printed JSON: 2-space indentation, UTF-8,
/// non-ASCII characters left unescaped.
pub fn catalog_to_json(catalog: &CinemaCatalog) -> Result<String, ExportError> {
    serde_json::to_string_pretty(catalog).map_err(|e| ExportError::OutputWriteFailed {
        path: "<buffer>".to_string(),
        source: e.into(),
    })
}

/// Write the catalog to `path`, overwriting any existing file.
pub fn write_catalog<P: AsRef<Path>>(catalog: &CinemaCatalog, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(catalog).map_err(|e| ExportError::OutputWriteFailed {
        path: path.display().to_string(),
        source: e.into(),
    })?;

    fs::write(path, json).map_err(|e| ExportError::OutputWriteFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    info!("Catalog written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{CinemaRecord, MovieRecord};

    fn sample_catalog() -> CinemaCatalog {
        CinemaCatalog {
            cinemas: vec![CinemaRecord {
                id: "http://example.org/cinema#Bioskop_Satu".to_string(),
                name: "Bioskop Satu".to_string(),
                city: Some("Kota A".to_string()),
                map_link: None,
                latitude: Some(3.5952),
                longitude: None,
                address: None,
                rating: None,
                ticket_price: None,
                total_studios: None,
                movies: vec![MovieRecord {
                    id: "http://example.org/cinema#Film_Satu".to_string(),
                    title: "Film Satu".to_string(),
                    director: None,
                    genres: vec!["Drama".to_string()],
                    cinemas: vec![],
                    age_rating: Some("SU_13".to_string()),
                    screen_types: vec![],
                    casts: None,
                    sinopsis_url: None,
                    duration_minutes: Some("120".to_string()),
                }],
            }],
        }
    }

    #[test]
    fn json_round_trip() {
        let catalog = sample_catalog();
        let json = catalog_to_json(&catalog).unwrap();
        let decoded: CinemaCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, catalog);
    }

    #[test]
    fn json_shape_and_null_fields() {
        let json = catalog_to_json(&sample_catalog()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let cinema = &value["cinemas"][0];
        assert_eq!(cinema["name"], "Bioskop Satu");
        assert_eq!(cinema["city"], "Kota A");
        // Absent longitude serializes as an explicit null, not a missing key.
        assert!(cinema["longitude"].is_null());
        assert!(cinema.get("longitude").is_some());
        assert_eq!(cinema["movies"][0]["ageRating"], "SU_13");
        assert_eq!(cinema["movies"][0]["durationMinutes"], "120");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "stale").unwrap();

        write_catalog(&sample_catalog(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let decoded: CinemaCatalog = serde_json::from_str(&content).unwrap();
        assert_eq!(decoded.cinemas.len(), 1);
    }

    #[test]
    fn write_to_unwritable_path_fails() {
        let err = write_catalog(&sample_catalog(), "/nonexistent/dir/data.json").unwrap_err();
        assert!(matches!(err, ExportError::OutputWriteFailed { .. }));
    }
}

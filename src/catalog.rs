//! The geo object catalog: dataset loading, validation, and read-only access.
//!
//! A catalog is loaded exactly once from a static dataset and never mutated
//! afterwards. Validation is fail-fast: the first malformed record aborts the
//! load and no partial catalog is produced.

use crate::error::{GeoRoiError, Result};
use crate::types::GeoObject;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Bundled demo dataset: building and playground footprints around Sofia.
const DEMO_DATASET: &str = include_str!("../data/geo_objects_demo.json");

/// Immutable catalog of categorized geo objects.
///
/// The catalog owns the canonical records; the spatial index refers back into
/// it by slot, so query results are always mapped through the catalog rather
/// than duplicated.
///
/// # Examples
///
/// ```
/// use georoi::Catalog;
///
/// let catalog = Catalog::from_json_str(
///     r#"[{ "category": "Building",
///           "long_min": 23.3711, "long_max": 23.3720,
///           "lat_min": 42.6696, "lat_max": 42.6703 }]"#,
/// )?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), georoi::GeoRoiError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    objects: Vec<GeoObject>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Build a catalog from in-memory records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`GeoRoiError::Validation`] identifying the first malformed
    /// record: non-finite bounds, minimum above maximum, or an empty
    /// category.
    pub fn from_records(records: Vec<GeoObject>) -> Result<Self> {
        for (slot, record) in records.iter().enumerate() {
            validate_record(record, slot)?;
        }

        log::info!("loaded {} geo objects into catalog", records.len());
        Ok(Self { objects: records })
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<GeoObject> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read a catalog from any JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<GeoObject> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Load the bundled demo dataset.
    pub fn demo() -> Result<Self> {
        Self::from_json_str(DEMO_DATASET)
    }

    /// All records, in load order.
    pub fn objects(&self) -> &[GeoObject] {
        &self.objects
    }

    /// The record at `slot`, if present.
    pub fn get(&self, slot: usize) -> Option<&GeoObject> {
        self.objects.get(slot)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

fn validate_record(record: &GeoObject, slot: usize) -> Result<()> {
    let bounds = [
        ("long_min", record.long_min),
        ("long_max", record.long_max),
        ("lat_min", record.lat_min),
        ("lat_max", record.lat_max),
    ];
    for (name, value) in bounds {
        if !value.is_finite() {
            return Err(GeoRoiError::Validation {
                record: slot,
                reason: format!("{name} is not finite: {value}"),
            });
        }
    }

    if record.long_min > record.long_max {
        return Err(GeoRoiError::Validation {
            record: slot,
            reason: format!(
                "long_min {} exceeds long_max {}",
                record.long_min, record.long_max
            ),
        });
    }

    if record.lat_min > record.lat_max {
        return Err(GeoRoiError::Validation {
            record: slot,
            reason: format!(
                "lat_min {} exceeds lat_max {}",
                record.lat_min, record.lat_max
            ),
        });
    }

    if record.category.is_empty() {
        return Err(GeoRoiError::Validation {
            record: slot,
            reason: "category is empty".to_string(),
        });
    }

    Ok(())
}

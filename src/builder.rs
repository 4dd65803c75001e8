//! Builder for constructing a [`RoiIndex`] from a dataset source.
//!
//! The builder owns the load-validate-build lifecycle: pick exactly one
//! dataset source, then `build()` loads the catalog, validates every record,
//! and bulk-loads the spatial index in one pass. Construction is the single
//! fallible boundary; the handle it produces never errors on queries.

use crate::catalog::Catalog;
use crate::engine::RoiIndex;
use crate::error::Result;
use crate::types::GeoObject;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
enum DatasetSource {
    #[default]
    Empty,
    Demo,
    Records(Vec<GeoObject>),
    JsonStr(String),
    JsonFile(PathBuf),
}

/// Builder for [`RoiIndex`] construction.
///
/// Each source setter replaces the previous one; with no source configured,
/// `build()` produces an index over an empty catalog.
#[derive(Debug, Clone, Default)]
pub struct RoiIndexBuilder {
    source: DatasetSource,
}

impl RoiIndexBuilder {
    /// Create a builder with no dataset configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use in-memory records as the dataset.
    pub fn records(mut self, records: Vec<GeoObject>) -> Self {
        self.source = DatasetSource::Records(records);
        self
    }

    /// Use a JSON array string as the dataset.
    pub fn json_str(mut self, json: impl Into<String>) -> Self {
        self.source = DatasetSource::JsonStr(json.into());
        self
    }

    /// Use a JSON file on disk as the dataset.
    pub fn json_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = DatasetSource::JsonFile(path.into());
        self
    }

    /// Use the bundled demo dataset.
    pub fn demo_dataset(mut self) -> Self {
        self.source = DatasetSource::Demo;
        self
    }

    /// Load the dataset, validate every record, and bulk-build the index.
    ///
    /// # Errors
    ///
    /// Any validation, parse, or I/O failure from the configured source.
    pub fn build(self) -> Result<RoiIndex> {
        let catalog = match self.source {
            DatasetSource::Empty => Catalog::new(),
            DatasetSource::Demo => Catalog::demo()?,
            DatasetSource::Records(records) => Catalog::from_records(records)?,
            DatasetSource::JsonStr(json) => Catalog::from_json_str(&json)?,
            DatasetSource::JsonFile(path) => Catalog::from_json_file(path)?,
        };

        Ok(RoiIndex::from_catalog(catalog))
    }
}

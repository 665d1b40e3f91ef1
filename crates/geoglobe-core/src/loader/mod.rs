// crates/geoglobe-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression, optional HTTP) and hands
//! the parsed collection to the flattener.
//!
//! A dataset is loaded exactly once per session. Whole-file failures are
//! [`GeoError`]s the caller can recover from with [`load_or_empty`];
//! individual malformed features are skipped and logged.

use crate::error::{GeoError, Result};
use crate::model::ShapeSet;
use crate::raw::RawFeatureCollection;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod common_io;

#[cfg(feature = "fetch")]
mod fetch;

#[cfg(feature = "fetch")]
pub use fetch::fetch_collection;

/// Default location of the bundled sample dataset.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "countries.sample.geojson"
}

pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}

/// Parse a feature collection from GeoJSON text.
pub fn parse_collection(json: &str) -> Result<RawFeatureCollection> {
    Ok(serde_json::from_str(json)?)
}

/// Read a feature collection from disk (`.gz` unwrapped with 'compact').
pub fn read_collection(path: impl AsRef<Path>) -> Result<RawFeatureCollection> {
    let reader = common_io::open_stream(path.as_ref())?;
    Ok(serde_json::from_reader(reader)?)
}

/// Lenient flatten with one `warn!` per skipped feature.
pub(crate) fn flatten_logged(raw: &RawFeatureCollection) -> ShapeSet {
    let (set, errors) = ShapeSet::from_collection(raw);
    for e in &errors {
        warn!("skipping feature: {e}");
    }
    info!(
        features = set.feature_count,
        shapes = set.len(),
        skipped = set.skipped,
        "flattened dataset"
    );
    set
}

impl ShapeSet {
    /// **Standard Loader:** read, parse and flatten a dataset file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading dataset");
        let raw = read_collection(path)?;
        Ok(flatten_logged(&raw))
    }

    /// The bundled sample dataset.
    pub fn load() -> Result<Self> {
        Self::load_from_path(default_dataset_path())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw = parse_collection(json)?;
        Ok(flatten_logged(&raw))
    }
}

/// Degraded-but-alive loading: any failure is logged and yields an empty set.
pub fn load_or_empty(path: impl AsRef<Path>) -> ShapeSet {
    recover(ShapeSet::load_from_path(path))
}

/// Turn a load outcome into a usable set, logging the failure if any.
pub fn recover(result: Result<ShapeSet>) -> ShapeSet {
    result.unwrap_or_else(|e: GeoError| {
        warn!("dataset load failed, continuing without countries: {e}");
        ShapeSet::empty()
    })
}

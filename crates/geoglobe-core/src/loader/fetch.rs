// crates/geoglobe-core/src/loader/fetch.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'fetch' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "fetch")]

use crate::error::{GeoError, Result};
use crate::model::ShapeSet;
use crate::raw::RawFeatureCollection;
use tracing::info;

/// Download and parse a feature collection. One blocking request, no retry.
pub fn fetch_collection(url: &str) -> Result<RawFeatureCollection> {
    info!(url, "fetching dataset");
    let body = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| GeoError::Fetch(format!("{url}: {e}")))?;

    Ok(serde_json::from_str(&body)?)
}

impl ShapeSet {
    /// Fetch a dataset over HTTP and flatten it leniently.
    pub fn fetch(url: &str) -> Result<Self> {
        let raw = fetch_collection(url)?;
        Ok(super::flatten_logged(&raw))
    }
}

// crates/geoglobe-core/src/config.rs
//! Tunables for search and camera focus.
//!
//! Defaults follow the Natural Earth admin-0 property names and the
//! reference globe behaviour.

use crate::model::CountryShape;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_KEY: &str = "ADMIN";
pub const DEFAULT_CODE_KEY: &str = "ADM0_A3";
pub const DEFAULT_MAX_RESULTS: usize = 8;

pub const DEFAULT_FOCUS_ALTITUDE: f64 = 1.4;
pub const DEFAULT_FOCUS_DURATION_MS: u32 = 1500;

/// How the index reads shapes and bounds its results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Property holding the administrative (display) name.
    pub name_key: String,
    /// Property holding the admin code, used as dedup/lookup key.
    pub code_key: String,
    pub max_results: usize,
    /// Transliterate accents before matching ("cote" finds "Côte d'Ivoire").
    pub fold_accents: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            name_key: DEFAULT_NAME_KEY.to_string(),
            code_key: DEFAULT_CODE_KEY.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            fold_accents: false,
        }
    }
}

impl IndexConfig {
    pub fn name_of<'s>(&self, shape: &'s CountryShape) -> Option<&'s str> {
        shape.property_str(&self.name_key)
    }

    pub fn code_of<'s>(&self, shape: &'s CountryShape) -> Option<&'s str> {
        shape.property_str(&self.code_key)
    }
}

/// Camera move issued when a search result is selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Altitude in globe radii.
    pub altitude: f64,
    pub duration_ms: u32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            altitude: DEFAULT_FOCUS_ALTITUDE,
            duration_ms: DEFAULT_FOCUS_DURATION_MS,
        }
    }
}

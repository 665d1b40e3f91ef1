// crates/geoglobe-core/src/model/flat.rs
use crate::config::{DEFAULT_CODE_KEY, DEFAULT_NAME_KEY};
use crate::raw::{Position, Properties, Ring};
use serde::{Deserialize, Serialize};

/// A single GeoJSON `Polygon`: outer ring first, holes after.
///
/// Serializes with its `"type": "Polygon"` tag so renderers can consume it as
/// plain GeoJSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Polygon {
    pub coordinates: Vec<Ring>,
}

/// The flattened, renderable unit: one polygon of one country.
///
/// A country made of several landmasses yields several shapes that share
/// `properties` and `shape_index`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryShape {
    /// Source feature properties, unchanged.
    pub properties: Properties,
    pub geometry: Polygon,
    /// Position of the source feature in the input collection.
    /// Used for colouring/keying, never for identity.
    pub shape_index: usize,
}

impl CountryShape {
    /// String value of a property, `None` if missing or not a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }

    /// Administrative name under the default `ADMIN` key.
    ///
    /// Ignores [`crate::config::IndexConfig::name_key`]; go through
    /// [`crate::config::IndexConfig::name_of`] when the dataset uses other keys.
    pub fn admin_name(&self) -> &str {
        self.property_str(DEFAULT_NAME_KEY).unwrap_or("")
    }

    /// Admin code under the default `ADM0_A3` key.
    ///
    /// Ignores [`crate::config::IndexConfig::code_key`]; see
    /// [`crate::config::IndexConfig::code_of`].
    pub fn admin_code(&self) -> &str {
        self.property_str(DEFAULT_CODE_KEY).unwrap_or("")
    }

    /// Outer boundary (`coordinates[0]`); empty if the polygon has no rings.
    pub fn outer_ring(&self) -> &[Position] {
        self.geometry
            .coordinates
            .first()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn first_position(&self) -> Option<Position> {
        self.outer_ring().first().copied()
    }
}

/// Representative center of a shape: the arithmetic mean of its outer ring.
///
/// Not guaranteed to lie inside concave or ring-shaped countries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// The flattened dataset held for the lifetime of a session.
///
/// Built once per load and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeSet {
    pub shapes: Vec<CountryShape>,
    /// Features in the source collection, before flattening.
    pub feature_count: usize,
    /// Features skipped for malformed geometry.
    pub skipped: usize,
}

impl ShapeSet {
    /// The degraded state after a failed load: no shapes at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[CountryShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn into_shapes(self) -> Vec<CountryShape> {
        self.shapes
    }
}

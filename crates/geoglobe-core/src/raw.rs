// crates/geoglobe-core/src/raw.rs
//! Raw GeoJSON input as it comes from the dataset file.
//!
//! Only the parts the globe needs are modelled: feature properties are kept
//! as an untyped JSON map, geometries are either `Polygon`, `MultiPolygon`
//! or "something else" (points, lines, collections), which the flattener
//! drops.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form feature properties, carried through to every derived shape.
pub type Properties = Map<String, Value>;

/// A GeoJSON position. Extra dimensions (altitude) are accepted and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
}

impl Position {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = String;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [lng, lat, ..] => Ok(Self::new(*lng, *lat)),
            _ => Err(format!(
                "position needs at least 2 numbers, got {}",
                v.len()
            )),
        }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.lng, p.lat]
    }
}

/// A closed boundary: `[[lng, lat], ...]`.
pub type Ring = Vec<Position>;

/// Raw geometry of a feature.
///
/// `coordinates` is optional so a missing or `null` ring-set reaches the
/// flattener (which reports it) instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RawGeometry {
    Polygon {
        #[serde(default)]
        coordinates: Option<Vec<Ring>>,
    },
    MultiPolygon {
        #[serde(default)]
        coordinates: Option<Vec<Vec<Ring>>>,
    },
    /// Any other GeoJSON geometry kind.
    #[serde(other)]
    Unsupported,
}

/// One entry of the source feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

/// Top-level `{ "type": "FeatureCollection", "features": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeatureCollection {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

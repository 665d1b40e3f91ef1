// crates/geoglobe-core/src/model/convert.rs
use super::flat::{CountryShape, Polygon, ShapeSet};
use crate::error::{GeoError, Result};
use crate::raw::{RawFeature, RawFeatureCollection, RawGeometry, Ring};

/// **Flattener:** Raw features -> one [`CountryShape`] per polygon.
///
/// - `Polygon` yields one shape with its geometry unchanged.
/// - `MultiPolygon` yields one shape per ring-set, re-tagged as `Polygon`,
///   all sharing the feature's properties and `shape_index`.
/// - Any other geometry kind, or a `null` geometry, yields nothing.
///
/// Output order follows the input: every shape of feature *i* comes before
/// the shapes of feature *i + 1*.
///
/// Fails on the first `Polygon`/`MultiPolygon` without a usable ring-set.
/// See [`flatten_lenient`] for the skipping variant.
///
/// ```rust
/// use geoglobe_core::model::convert::flatten;
/// use geoglobe_core::raw::RawFeatureCollection;
///
/// let raw: RawFeatureCollection = serde_json::from_str(r#"{
///   "features": [{
///     "properties": { "ADMIN": "Islands", "ADM0_A3": "ISL" },
///     "geometry": { "type": "MultiPolygon", "coordinates": [
///       [[[0, 0], [1, 0], [1, 1]]],
///       [[[5, 5], [6, 5], [6, 6]]]
///     ]}
///   }]
/// }"#).unwrap();
///
/// let shapes = flatten(&raw.features).unwrap();
/// assert_eq!(shapes.len(), 2);
/// assert!(shapes.iter().all(|s| s.shape_index == 0));
/// ```
pub fn flatten(features: &[RawFeature]) -> Result<Vec<CountryShape>> {
    let mut out = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        flatten_feature(index, feature, &mut out)?;
    }
    Ok(out)
}

/// Same rules as [`flatten`], but a malformed feature is skipped and its
/// error collected instead of aborting the whole collection.
pub fn flatten_lenient(features: &[RawFeature]) -> (Vec<CountryShape>, Vec<GeoError>) {
    let mut out = Vec::with_capacity(features.len());
    let mut errors = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        if let Err(e) = flatten_feature(index, feature, &mut out) {
            errors.push(e);
        }
    }
    (out, errors)
}

/// Emits the shapes of one feature. Validates the whole feature before
/// pushing, so a failing feature contributes nothing.
fn flatten_feature(index: usize, feature: &RawFeature, out: &mut Vec<CountryShape>) -> Result<()> {
    match &feature.geometry {
        Some(RawGeometry::Polygon { coordinates }) => {
            let rings = coordinates
                .as_deref()
                .ok_or_else(|| GeoError::malformed(index, "Polygon without coordinates"))?;
            check_rings(index, rings, "Polygon")?;

            out.push(CountryShape {
                properties: feature.properties.clone().unwrap_or_default(),
                geometry: Polygon {
                    coordinates: rings.to_vec(),
                },
                shape_index: index,
            });
        }
        Some(RawGeometry::MultiPolygon { coordinates }) => {
            let polygons = coordinates
                .as_deref()
                .ok_or_else(|| GeoError::malformed(index, "MultiPolygon without coordinates"))?;
            if polygons.is_empty() {
                return Err(GeoError::malformed(index, "MultiPolygon with no polygons"));
            }
            for rings in polygons {
                check_rings(index, rings, "MultiPolygon member")?;
            }

            let properties = feature.properties.clone().unwrap_or_default();
            out.extend(polygons.iter().map(|rings| CountryShape {
                properties: properties.clone(),
                geometry: Polygon {
                    coordinates: rings.clone(),
                },
                shape_index: index,
            }));
        }
        Some(RawGeometry::Unsupported) | None => {}
    }
    Ok(())
}

fn check_rings(index: usize, rings: &[Ring], what: &str) -> Result<()> {
    match rings.first() {
        None => Err(GeoError::malformed(index, format!("{what} has no rings"))),
        Some(outer) if outer.is_empty() => Err(GeoError::malformed(
            index,
            format!("{what} has an empty outer ring"),
        )),
        Some(_) => Ok(()),
    }
}

impl ShapeSet {
    /// Strict build: fails on the first malformed feature.
    pub fn try_from_collection(raw: &RawFeatureCollection) -> Result<Self> {
        Ok(Self {
            shapes: flatten(&raw.features)?,
            feature_count: raw.features.len(),
            skipped: 0,
        })
    }

    /// Lenient build: malformed features are dropped and returned alongside.
    pub fn from_collection(raw: &RawFeatureCollection) -> (Self, Vec<GeoError>) {
        let (shapes, errors) = flatten_lenient(&raw.features);
        let set = Self {
            shapes,
            feature_count: raw.features.len(),
            skipped: errors.len(),
        };
        (set, errors)
    }
}

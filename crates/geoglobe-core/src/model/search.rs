// crates/geoglobe-core/src/model/search.rs
use super::flat::{CountryShape, GeoPoint, ShapeSet};
use crate::common::ShapeStats;
use crate::config::IndexConfig;
use crate::error::{GeoError, Result};
use crate::text::match_key;
use std::collections::HashSet;
use tracing::debug;

/// Read-only lookup over a flattened shape list.
///
/// Holds nothing but a borrow of the list and its configuration; every query
/// is recomputed from scratch.
#[derive(Debug, Clone)]
pub struct CountryIndex<'a> {
    shapes: &'a [CountryShape],
    config: IndexConfig,
}

impl<'a> CountryIndex<'a> {
    pub fn new(shapes: &'a [CountryShape]) -> Self {
        Self::with_config(shapes, IndexConfig::default())
    }

    pub fn with_config(shapes: &'a [CountryShape], config: IndexConfig) -> Self {
        Self { shapes, config }
    }

    pub fn shapes(&self) -> &'a [CountryShape] {
        self.shapes
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Countries whose name contains `query`, case-insensitively.
    ///
    /// - An empty query returns nothing (there is no "browse all").
    /// - One entry per admin code: the first matching shape in list order.
    /// - At most `max_results` entries, in first-occurrence order.
    ///
    /// Shapes without a name never match. Shapes without a code are grouped
    /// under the empty code.
    pub fn search(&self, query: &str) -> Vec<&'a CountryShape> {
        self.search_positions(query)
            .into_iter()
            .map(|i| &self.shapes[i])
            .collect()
    }

    /// Like [`CountryIndex::search`], returning positions in the shape list.
    pub fn search_positions(&self, query: &str) -> Vec<usize> {
        let mut out = Vec::new();
        if query.is_empty() {
            return out;
        }

        let q = match_key(query, self.config.fold_accents);
        let mut seen: HashSet<&str> = HashSet::new();

        for (i, shape) in self.shapes.iter().enumerate() {
            if out.len() >= self.config.max_results {
                break;
            }
            let Some(name) = self.config.name_of(shape) else {
                continue;
            };
            if !match_key(name, self.config.fold_accents).contains(&q) {
                continue;
            }
            if seen.insert(self.config.code_of(shape).unwrap_or("")) {
                out.push(i);
            }
        }

        debug!(query, hits = out.len(), "country search");
        out
    }

    /// All shapes of one country (ASCII case-insensitive on the code).
    pub fn find_by_code(&self, code: &str) -> Vec<&'a CountryShape> {
        let code = code.trim();
        if code.is_empty() {
            return Vec::new();
        }
        self.shapes
            .iter()
            .filter(|s| {
                self.config
                    .code_of(s)
                    .is_some_and(|c| c.eq_ignore_ascii_case(code))
            })
            .collect()
    }

    /// First shape of every distinct admin code, in list order.
    pub fn countries(&self) -> Vec<&'a CountryShape> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.shapes
            .iter()
            .filter(|s| seen.insert(self.config.code_of(*s).unwrap_or("")))
            .collect()
    }

    pub fn centroid(&self, shape: &CountryShape) -> Result<GeoPoint> {
        centroid(shape)
    }

    /// Display label of a shape; empty when the name property is missing.
    pub fn label<'s>(&self, shape: &'s CountryShape) -> &'s str {
        self.config.name_of(shape).unwrap_or("")
    }

    /// Stable row key for a result list: admin code plus first outer
    /// coordinate, so two islands of one country never collide.
    pub fn result_key(&self, shape: &CountryShape) -> String {
        let code = self.config.code_of(shape).unwrap_or("");
        match shape.first_position() {
            Some(p) => format!("{code}:{},{}", p.lng, p.lat),
            None => format!("{code}:#{}", shape.shape_index),
        }
    }

    pub fn distinct_codes(&self) -> usize {
        self.countries().len()
    }
}

/// Arithmetic mean of the outer ring's points.
///
/// Holes are ignored. This is not an area-weighted centroid; for large or
/// concave countries the point can sit visibly off-center.
///
/// ```rust
/// use geoglobe_core::model::search::centroid;
/// use geoglobe_core::model::{CountryShape, Polygon};
/// use geoglobe_core::raw::Position;
///
/// let shape = CountryShape {
///     properties: Default::default(),
///     geometry: Polygon {
///         coordinates: vec![vec![
///             Position::new(0.0, 0.0),
///             Position::new(2.0, 0.0),
///             Position::new(2.0, 2.0),
///             Position::new(0.0, 2.0),
///         ]],
///     },
///     shape_index: 0,
/// };
/// let c = centroid(&shape).unwrap();
/// assert_eq!((c.longitude, c.latitude), (1.0, 1.0));
/// ```
pub fn centroid(shape: &CountryShape) -> Result<GeoPoint> {
    let ring = shape.outer_ring();
    if ring.is_empty() {
        return Err(GeoError::EmptyRing {
            shape_index: shape.shape_index,
        });
    }

    let mut lng = 0.0;
    let mut lat = 0.0;
    for p in ring {
        lng += p.lng;
        lat += p.lat;
    }
    let n = ring.len() as f64;
    let point = GeoPoint {
        latitude: lat / n,
        longitude: lng / n,
    };
    if !(point.latitude.is_finite() && point.longitude.is_finite()) {
        return Err(GeoError::NonFiniteCentroid {
            shape_index: shape.shape_index,
        });
    }
    Ok(point)
}

/// [`CountryIndex::search`] with the default configuration.
pub fn search<'a>(shapes: &'a [CountryShape], query: &str) -> Vec<&'a CountryShape> {
    CountryIndex::new(shapes).search(query)
}

impl ShapeSet {
    pub fn index(&self) -> CountryIndex<'_> {
        CountryIndex::new(&self.shapes)
    }

    pub fn index_with(&self, config: IndexConfig) -> CountryIndex<'_> {
        CountryIndex::with_config(&self.shapes, config)
    }

    pub fn stats(&self) -> ShapeStats {
        ShapeStats {
            features: self.feature_count,
            shapes: self.shapes.len(),
            countries: self.index().distinct_codes(),
            skipped: self.skipped,
        }
    }
}

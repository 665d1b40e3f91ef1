//! geoglobe prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::ShapeStats;
pub use crate::config::{FocusConfig, IndexConfig};
pub use crate::error::{GeoError, Result};
pub use crate::loader::{load_or_empty, recover};
pub use crate::model::{
    centroid, flatten, flatten_lenient, search, CountryIndex, CountryShape, GeoPoint, Polygon,
    ShapeSet,
};
pub use crate::raw::{Position, RawFeature, RawFeatureCollection, RawGeometry};
pub use crate::session::GlobeSession;
pub use crate::style::{GlobeStyle, PolygonStyle, Rgba};
pub use crate::text::fold_key;
pub use crate::traits::{GlobeRenderer, PointOfView};

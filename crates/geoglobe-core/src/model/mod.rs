// crates/geoglobe-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod search;

pub use convert::{flatten, flatten_lenient};
pub use flat::{CountryShape, GeoPoint, Polygon, ShapeSet};
pub use search::{centroid, search, CountryIndex};

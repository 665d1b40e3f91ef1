// crates/geoglobe-core/src/lib.rs
//! geoglobe-core
//! =============
//!
//! Country lookup and geometry preprocessing for interactive globe overlays.
//!
//! - [`model::flatten`] turns a GeoJSON feature collection into a flat list of
//!   single-polygon [`CountryShape`]s.
//! - [`CountryIndex`] searches that list by country name and computes a
//!   representative center per shape.
//! - [`session::GlobeSession`] keeps the UI state (query, matches, hovered
//!   country) and drives an external [`traits::GlobeRenderer`].
//!
//! ```rust
//! use geoglobe_core::prelude::*;
//!
//! let set = ShapeSet::from_json_str(r#"{ "features": [
//!   { "properties": { "ADMIN": "France", "ADM0_A3": "FRA" },
//!     "geometry": { "type": "Polygon", "coordinates": [[[2, 46], [3, 47], [1, 48]]] } }
//! ]}"#)?;
//!
//! let hits = set.index().search("FRAN");
//! assert_eq!(hits[0].admin_code(), "FRA");
//! # Ok::<(), GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod session;
pub mod style;
pub mod text;
pub mod traits;
// Shared Raw Input (GeoJSON as read from disk)
pub mod raw;

// Re-exports
pub use crate::common::ShapeStats;
pub use crate::error::{GeoError, Result};
pub use model::{CountryIndex, CountryShape, GeoPoint, Polygon, ShapeSet};

// crates/geoglobe-core/src/traits.rs
use crate::model::{CountryShape, GeoPoint};
use serde::{Deserialize, Serialize};

/// Camera target understood by globe widgets: `{ lat, lng, altitude }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointOfView {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    /// Distance from the surface in globe radii.
    pub altitude: f64,
}

impl PointOfView {
    pub fn over(point: GeoPoint, altitude: f64) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            altitude,
        }
    }
}

/// The external 3D globe widget, seen from the core.
///
/// The core never renders. It hands the widget the flattened shapes and
/// issues camera moves; labels and styles are pulled from
/// [`crate::session::GlobeSession`] by whatever glue owns the widget.
///
/// # Examples
/// ```rust
/// use geoglobe_core::traits::{GlobeRenderer, PointOfView};
/// use geoglobe_core::model::CountryShape;
///
/// #[derive(Default)]
/// struct Recorder(Vec<(PointOfView, u32)>);
///
/// impl GlobeRenderer for Recorder {
///     fn set_polygons(&mut self, _shapes: &[CountryShape]) {}
///     fn point_of_view(&mut self, target: PointOfView, duration_ms: u32) {
///         self.0.push((target, duration_ms));
///     }
/// }
/// ```
pub trait GlobeRenderer {
    /// Replace the polygons drawn on the globe.
    fn set_polygons(&mut self, shapes: &[CountryShape]);

    /// Animate the camera to `target` over `duration_ms` milliseconds.
    fn point_of_view(&mut self, target: PointOfView, duration_ms: u32);
}

// crates/geoglobe-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading a dataset or deriving shapes from it.
///
/// The first four variants are dataset load failures. Callers that must stay
/// interactive recover from them with an empty shape list
/// (see [`crate::loader::load_or_empty`]). The geometry variants are raised
/// per feature or per shape and are meant to be skipped at the call site.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Dataset file missing.
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP download of the dataset failed.
    #[error("Dataset download failed: {0}")]
    Fetch(String),

    /// A `Polygon`/`MultiPolygon` without a usable ring-set.
    #[error("Malformed geometry in feature {feature}: {reason}")]
    MalformedGeometry { feature: usize, reason: String },

    /// Centroid requested for a ring with zero coordinates.
    #[error("Empty outer ring in shape derived from feature {shape_index}")]
    EmptyRing { shape_index: usize },

    /// Coordinates too large to average within `f64`.
    #[error("Centroid of shape derived from feature {shape_index} is not finite")]
    NonFiniteCentroid { shape_index: usize },
}

impl GeoError {
    pub fn malformed(feature: usize, reason: impl Into<String>) -> Self {
        Self::MalformedGeometry {
            feature,
            reason: reason.into(),
        }
    }

    /// `true` for fetch/parse failures of the dataset as a whole.
    pub fn is_dataset_load(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Io(_) | Self::Json(_) | Self::Fetch(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;

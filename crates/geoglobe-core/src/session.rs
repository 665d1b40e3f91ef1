// crates/geoglobe-core/src/session.rs
//! UI state of the globe: query text, current matches, hovered country.
//!
//! Every update method recomputes what it affects from scratch. The hovered
//! country is kept as a bare admin code, so it survives a reload of the
//! shape list without pointing at stale shapes.

use crate::config::{FocusConfig, IndexConfig};
use crate::error::GeoError;
use crate::model::{CountryIndex, CountryShape, ShapeSet};
use crate::raw::RawFeatureCollection;
use crate::style::{GlobeStyle, PolygonStyle};
use crate::traits::{GlobeRenderer, PointOfView};
use std::fmt::Display;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct GlobeSession {
    set: ShapeSet,
    config: IndexConfig,
    focus: FocusConfig,
    style: GlobeStyle,
    query: String,
    /// Positions of the current matches in `set.shapes`.
    results: Vec<usize>,
    hovered: Option<String>,
}

impl GlobeSession {
    pub fn new(config: IndexConfig, focus: FocusConfig, style: GlobeStyle) -> Self {
        Self {
            config,
            focus,
            style,
            ..Self::default()
        }
    }

    // -----------------------------------------------------------------------
    // DATASET
    // -----------------------------------------------------------------------

    /// Install a freshly loaded shape set and re-run the current query.
    ///
    /// The loader already reports the counts of what it flattened.
    pub fn load(&mut self, set: ShapeSet) {
        debug!(shapes = set.len(), "installing shape set");
        self.set = set;
        self.refresh();
    }

    /// Flatten a parsed collection, skipping (and logging) malformed features.
    pub fn load_collection(&mut self, raw: &RawFeatureCollection) {
        self.load(crate::loader::flatten_logged(raw));
    }

    /// Record a failed dataset load. The globe keeps running with no shapes.
    pub fn load_failed(&mut self, err: &dyn Display) {
        warn!("dataset load failed, continuing without countries: {err}");
        self.set = ShapeSet::empty();
        self.refresh();
    }

    /// [`GlobeSession::load`] or [`GlobeSession::load_failed`], depending on
    /// the outcome of a load.
    pub fn load_result(&mut self, result: Result<ShapeSet, GeoError>) {
        match result {
            Ok(set) => self.load(set),
            Err(e) => self.load_failed(&e),
        }
    }

    /// Push the current shapes to the renderer.
    pub fn sync_polygons<R: GlobeRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_polygons(self.set.shapes());
    }

    pub fn shape_set(&self) -> &ShapeSet {
        &self.set
    }

    pub fn shapes(&self) -> &[CountryShape] {
        self.set.shapes()
    }

    pub fn index(&self) -> CountryIndex<'_> {
        CountryIndex::with_config(self.set.shapes(), self.config.clone())
    }

    // -----------------------------------------------------------------------
    // SEARCH
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Called on every keystroke.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refresh();
    }

    pub fn results(&self) -> Vec<&CountryShape> {
        let shapes = self.set.shapes();
        self.results.iter().map(|&i| &shapes[i]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    fn refresh(&mut self) {
        let results = self.index().search_positions(&self.query);
        self.results = results;
    }

    // -----------------------------------------------------------------------
    // HOVER / SELECT
    // -----------------------------------------------------------------------

    /// Hover callback from the renderer: the hovered shape's code, or none.
    pub fn hover(&mut self, code: Option<&str>) {
        self.hovered = code.filter(|c| !c.is_empty()).map(str::to_owned);
    }

    pub fn hovered_code(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Pick the `position`-th entry of the current result list.
    ///
    /// Sets the query text to the country's name, clears the list, marks the
    /// country as hovered and moves the camera over its centroid. Returns the
    /// camera target, or `None` when `position` is out of range or the shape
    /// has no usable outer ring (state is still updated in that case, only
    /// the camera stays put).
    pub fn select<R: GlobeRenderer + ?Sized>(
        &mut self,
        position: usize,
        renderer: &mut R,
    ) -> Option<PointOfView> {
        let &shape_pos = self.results.get(position)?;
        self.focus_shape(shape_pos, renderer)
    }

    /// Same as [`GlobeSession::select`] for any position in the shape list.
    pub fn focus_shape<R: GlobeRenderer + ?Sized>(
        &mut self,
        shape_pos: usize,
        renderer: &mut R,
    ) -> Option<PointOfView> {
        let shape = self.set.shapes().get(shape_pos)?;
        let name = self.config.name_of(shape).unwrap_or("").to_owned();
        let code = self.config.code_of(shape).map(str::to_owned);
        let target = crate::model::centroid(shape)
            .map(|c| PointOfView::over(c, self.focus.altitude));

        self.query = name;
        self.results.clear();
        self.hovered = code;

        match target {
            Ok(target) => {
                renderer.point_of_view(target, self.focus.duration_ms);
                Some(target)
            }
            Err(e) => {
                warn!("cannot focus country: {e}");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // RENDERER CALLBACKS
    // -----------------------------------------------------------------------

    pub fn label<'s>(&self, shape: &'s CountryShape) -> &'s str {
        self.config.name_of(shape).unwrap_or("")
    }

    pub fn style_for(&self, shape: &CountryShape) -> PolygonStyle {
        self.style
            .for_code(self.config.code_of(shape), self.hovered_code())
    }

    pub fn style(&self) -> &GlobeStyle {
        &self.style
    }

    pub fn focus_config(&self) -> FocusConfig {
        self.focus
    }
}

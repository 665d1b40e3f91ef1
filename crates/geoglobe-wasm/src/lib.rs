//! geoglobe-wasm — WebAssembly bindings for geoglobe-core
//!
//! This crate exposes the globe's country search and camera focus to
//! JavaScript. The page owns the 3D globe widget (e.g. `globe.gl`) and the
//! dataset fetch; this module owns the state: flattened shapes, query,
//! matches and the hovered country.
//!
//! What it provides
//! ----------------
//! - Panic hook installation on module load (via `#[wasm_bindgen(start)]`)
//! - `GlobeApp`: load a GeoJSON text once, feed keystrokes, read matches,
//!   select a match (moves the globe camera), hover callbacks, per-shape
//!   style and label.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { GlobeApp } from 'geoglobe-wasm';
//!
//! async function main() {
//!   await init();
//!   const app = new GlobeApp();
//!   try {
//!     const res = await fetch('/data/countries.geojson');
//!     app.loadGeojson(await res.text());
//!   } catch (err) {
//!     app.loadFailed(String(err));
//!   }
//!
//!   const globe = Globe()(document.getElementById('globe'))
//!     .polygonsData(app.polygons())
//!     .polygonLabel(d => d.properties.ADMIN || '')
//!     .polygonAltitude(d => app.styleFor(d.properties.ADM0_A3).altitude)
//!     .onPolygonHover(d => app.hover(d ? d.properties.ADM0_A3 : null));
//!
//!   input.oninput = e => { app.setQuery(e.target.value); render(app.results()); };
//!   // on click of row i: app.select(i, globe);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - A dataset that fails to parse is logged to the console and leaves the
//!   globe with no overlays; every call keeps working.
//! - Values handed to JS are plain JSON-compatible objects.
use geoglobe_core::model::ShapeSet;
use geoglobe_core::session::GlobeSession;
use geoglobe_core::traits::{GlobeRenderer, PointOfView};
use geoglobe_core::CountryShape;
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing geoglobe WASM module...".into());
}

/// Plain objects instead of JS `Map`s for property maps.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Renderer glue
-------------------------------------------------------------------------- */

/// A globe widget object exposing `polygonsData(array)` and
/// `pointOfView({lat, lng, altitude}, ms)`.
struct JsGlobe<'a>(&'a JsValue);

impl JsGlobe<'_> {
    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let f: js_sys::Function = js_sys::Reflect::get(self.0, &JsValue::from_str(method))?
            .dyn_into()?;
        let args: js_sys::Array = args.iter().collect();
        f.apply(self.0, &args)
    }

    fn call_logged(&self, method: &str, args: &[JsValue]) {
        if let Err(e) = self.call(method, args) {
            web_sys::console::warn_2(&format!("globe.{method} failed:").into(), &e);
        }
    }
}

impl GlobeRenderer for JsGlobe<'_> {
    fn set_polygons(&mut self, shapes: &[CountryShape]) {
        match to_js(shapes) {
            Ok(data) => self.call_logged("polygonsData", &[data]),
            Err(e) => web_sys::console::warn_1(&e),
        }
    }

    fn point_of_view(&mut self, target: PointOfView, duration_ms: u32) {
        match to_js(&target) {
            Ok(pov) => self.call_logged("pointOfView", &[pov, JsValue::from(duration_ms)]),
            Err(e) => web_sys::console::warn_1(&e),
        }
    }
}

/* --------------------------------------------------------------------------
   App state
-------------------------------------------------------------------------- */

#[wasm_bindgen]
#[derive(Default)]
pub struct GlobeApp {
    session: GlobeSession,
}

#[wasm_bindgen]
impl GlobeApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GlobeApp {
        GlobeApp::default()
    }

    /// Parse and flatten a GeoJSON feature collection. Never throws: a bad
    /// document is logged and leaves the globe empty. Returns the shape count.
    #[wasm_bindgen(js_name = loadGeojson)]
    pub fn load_geojson(&mut self, text: &str) -> usize {
        match ShapeSet::from_json_str(text) {
            Ok(set) => {
                let stats = set.stats();
                web_sys::console::log_1(
                    &format!(
                        "✓ Loaded {} countries ({} polygons, {} skipped)",
                        stats.countries, stats.shapes, stats.skipped
                    )
                    .into(),
                );
                self.session.load(set);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("GeoJSON error: {e}").into());
                self.session.load_failed(&e);
            }
        }
        self.session.shapes().len()
    }

    /// The page could not fetch the dataset.
    #[wasm_bindgen(js_name = loadFailed)]
    pub fn load_failed(&mut self, message: &str) {
        web_sys::console::error_1(&format!("GeoJSON error: {message}").into());
        self.session.load_failed(&message);
    }

    #[wasm_bindgen(js_name = shapeCount)]
    pub fn shape_count(&self) -> usize {
        self.session.shapes().len()
    }

    /// Flattened shapes for the globe's `polygonsData`.
    pub fn polygons(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.shapes())
    }

    /// Push the shapes straight into a globe widget.
    #[wasm_bindgen(js_name = syncPolygons)]
    pub fn sync_polygons(&self, globe: &JsValue) {
        self.session.sync_polygons(&mut JsGlobe(globe));
    }

    /* ----------------------------------------------------------------------
       Search box
    ---------------------------------------------------------------------- */

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, text: &str) {
        self.session.set_query(text);
    }

    pub fn query(&self) -> String {
        self.session.query().to_string()
    }

    #[wasm_bindgen(js_name = resultCount)]
    pub fn result_count(&self) -> usize {
        self.session.result_count()
    }

    /// Current matches as `[{ key, name, code, shapeIndex }]`.
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let index = self.session.index();
        let rows: Vec<_> = self
            .session
            .results()
            .into_iter()
            .map(|s| {
                json!({
                    "key": index.result_key(s),
                    "name": index.label(s),
                    "code": index.config().code_of(s),
                    "shapeIndex": s.shape_index,
                })
            })
            .collect();
        to_js(&rows)
    }

    /// Click on the `position`-th match: updates the search box state and
    /// moves the globe camera. Returns the camera target or `null`.
    pub fn select(&mut self, position: usize, globe: &JsValue) -> Result<JsValue, JsValue> {
        match self.session.select(position, &mut JsGlobe(globe)) {
            Some(target) => to_js(&target),
            None => Ok(JsValue::NULL),
        }
    }

    /* ----------------------------------------------------------------------
       Renderer callbacks
    ---------------------------------------------------------------------- */

    pub fn hover(&mut self, code: Option<String>) {
        self.session.hover(code.as_deref());
    }

    #[wasm_bindgen(js_name = hoveredCode)]
    pub fn hovered_code(&self) -> Option<String> {
        self.session.hovered_code().map(str::to_string)
    }

    /// Style of a shape with admin code `code` under the current hover.
    #[wasm_bindgen(js_name = styleFor)]
    pub fn style_for(&self, code: Option<String>) -> Result<JsValue, JsValue> {
        let style = self
            .session
            .style()
            .for_code(code.as_deref(), self.session.hovered_code());
        to_js(&style)
    }

    /// Label of the shape at `position` in `polygons()`.
    pub fn label(&self, position: usize) -> String {
        self.session
            .shapes()
            .get(position)
            .map(|s| self.session.label(s).to_string())
            .unwrap_or_default()
    }

    /// Style of the shape at `position` in `polygons()`.
    pub fn style(&self, position: usize) -> Result<JsValue, JsValue> {
        match self.session.shapes().get(position) {
            Some(s) => to_js(&self.session.style_for(s)),
            None => Ok(JsValue::NULL),
        }
    }
}

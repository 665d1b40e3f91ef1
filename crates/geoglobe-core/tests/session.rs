mod common;

use common::*;
use geoglobe_core::config::{FocusConfig, IndexConfig};
use geoglobe_core::model::ShapeSet;
use geoglobe_core::raw::RawFeatureCollection;
use geoglobe_core::session::GlobeSession;
use geoglobe_core::style::GlobeStyle;
use geoglobe_core::traits::{GlobeRenderer, PointOfView};
use geoglobe_core::{CountryShape, GeoError};

#[derive(Default)]
struct Recorder {
    polygons: usize,
    moves: Vec<(PointOfView, u32)>,
}

impl GlobeRenderer for Recorder {
    fn set_polygons(&mut self, shapes: &[CountryShape]) {
        self.polygons = shapes.len();
    }

    fn point_of_view(&mut self, target: PointOfView, duration_ms: u32) {
        self.moves.push((target, duration_ms));
    }
}

fn loaded() -> GlobeSession {
    let mainland: &[[f64; 2]] = &[[2.0, 46.0], [3.0, 47.0], [1.0, 48.0]];
    let corsica: &[[f64; 2]] = &[[9.0, 42.0], [9.0, 43.0]];
    let raw = RawFeatureCollection {
        kind: Some("FeatureCollection".into()),
        features: vec![
            multi_feature("France", "FRA", &[mainland, corsica]),
            polygon_feature("Francistan", "FRS", TRIANGLE),
            polygon_feature("Germany", "DEU", TRIANGLE),
        ],
    };
    let mut session = GlobeSession::default();
    session.load_collection(&raw);
    session
}

#[test]
fn typing_recomputes_results() {
    let mut session = loaded();
    assert_eq!(session.result_count(), 0);

    session.set_query("fr");
    assert_eq!(names(&session.results()), vec!["France", "Francistan"]);

    session.set_query("FRANCI");
    assert_eq!(names(&session.results()), vec!["Francistan"]);

    session.set_query("");
    assert!(session.results().is_empty());
}

#[test]
fn selecting_a_result_focuses_the_camera() {
    let mut session = loaded();
    let mut globe = Recorder::default();
    session.set_query("fran");

    let target = session.select(0, &mut globe).unwrap();

    assert_eq!(session.query(), "France");
    assert!(session.results().is_empty());
    assert_eq!(session.hovered_code(), Some("FRA"));
    assert_eq!(globe.moves.len(), 1);

    let (pov, duration) = globe.moves[0];
    assert_eq!(pov, target);
    assert_eq!(duration, 1500);
    assert_eq!(pov.altitude, 1.4);
    assert_eq!((pov.longitude, pov.latitude), (2.0, 47.0));
}

#[test]
fn selecting_out_of_range_does_nothing() {
    let mut session = loaded();
    let mut globe = Recorder::default();
    session.set_query("germ");

    assert!(session.select(3, &mut globe).is_none());
    assert_eq!(session.query(), "germ");
    assert_eq!(session.result_count(), 1);
    assert!(globe.moves.is_empty());
}

#[test]
fn focus_config_is_honoured() {
    let mut session = GlobeSession::new(
        IndexConfig::default(),
        FocusConfig {
            altitude: 2.5,
            duration_ms: 300,
        },
        GlobeStyle::default(),
    );
    session.load(ShapeSet {
        shapes: vec![shape("Germany", "DEU", TRIANGLE, 0)],
        feature_count: 1,
        skipped: 0,
    });
    session.set_query("ger");

    let mut globe = Recorder::default();
    session.select(0, &mut globe).unwrap();
    assert_eq!(globe.moves[0].0.altitude, 2.5);
    assert_eq!(globe.moves[0].1, 300);
}

#[test]
fn hover_drives_the_style() {
    let mut session = loaded();
    let shapes = session.shapes().to_vec();

    session.hover(Some("FRA"));
    assert_eq!(session.style_for(&shapes[0]).altitude, 0.15);
    assert_eq!(session.style_for(&shapes[1]).altitude, 0.15);
    assert_eq!(session.style_for(&shapes[2]).altitude, 0.05);
    assert_eq!(
        session.style_for(&shapes[0]).cap_color.to_string(),
        "rgba(233,196,106,0.95)"
    );
    assert_eq!(
        session.style_for(&shapes[3]).side_color.to_string(),
        "rgba(255,255,255,0.03)"
    );

    session.hover(None);
    assert_eq!(session.hovered_code(), None);
    assert_eq!(session.style_for(&shapes[0]).altitude, 0.05);

    session.hover(Some(""));
    assert_eq!(session.hovered_code(), None);
}

#[test]
fn labels_read_the_admin_name() {
    let session = loaded();
    let mut nameless = session.shapes()[0].clone();
    nameless.properties.clear();
    assert_eq!(session.label(&session.shapes()[2]), "Francistan");
    assert_eq!(session.label(&nameless), "");
}

#[test]
fn failed_load_leaves_an_empty_interactive_globe() {
    let mut session = loaded();
    session.hover(Some("FRA"));

    session.load_result(Err(GeoError::NotFound("countries.geojson".into())));

    assert!(session.shapes().is_empty());
    session.set_query("fra");
    assert!(session.results().is_empty());

    let mut globe = Recorder::default();
    session.sync_polygons(&mut globe);
    assert_eq!(globe.polygons, 0);
    assert!(session.select(0, &mut globe).is_none());
}

#[test]
fn hovered_code_survives_reload() {
    let mut session = loaded();
    session.hover(Some("DEU"));
    session.set_query("ger");

    session.load(ShapeSet {
        shapes: vec![
            shape("Germany", "DEU", TRIANGLE, 0),
            shape("Georgia", "GEO", TRIANGLE, 1),
        ],
        feature_count: 2,
        skipped: 0,
    });

    assert_eq!(session.hovered_code(), Some("DEU"));
    assert_eq!(names(&session.results()), vec!["Germany"]);
    assert_eq!(session.style_for(&session.shapes()[0]).altitude, 0.15);
}

#[test]
fn unfocusable_shape_still_updates_state() {
    let mut session = GlobeSession::default();
    session.load(ShapeSet {
        shapes: vec![CountryShape {
            geometry: geoglobe_core::Polygon {
                coordinates: vec![vec![]],
            },
            ..shape("Void", "VOI", TRIANGLE, 0)
        }],
        feature_count: 1,
        skipped: 0,
    });
    session.set_query("vo");

    let mut globe = Recorder::default();
    assert!(session.select(0, &mut globe).is_none());
    assert_eq!(session.query(), "Void");
    assert_eq!(session.hovered_code(), Some("VOI"));
    assert!(globe.moves.is_empty());
}

#[test]
fn sync_pushes_all_polygons() {
    let session = loaded();
    let mut globe = Recorder::default();
    session.sync_polygons(&mut globe);
    assert_eq!(globe.polygons, 4);
}

#[test]
fn load_collection_installs_the_flattened_set() {
    let raw = RawFeatureCollection {
        kind: None,
        features: vec![
            polygon_feature("Germany", "DEU", TRIANGLE),
            polygon_feature("Broken", "BRK", &[]),
        ],
    };
    let mut session = GlobeSession::default();
    session.set_query("ger");
    session.load_collection(&raw);

    let set = session.shape_set();
    assert_eq!((set.feature_count, set.len(), set.skipped), (2, 1, 1));
    assert_eq!(names(&session.results()), vec!["Germany"]);
}

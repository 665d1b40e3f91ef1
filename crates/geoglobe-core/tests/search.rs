mod common;

use common::*;
use geoglobe_core::config::IndexConfig;
use geoglobe_core::model::{centroid, search, CountryIndex};
use geoglobe_core::{CountryShape, GeoError, Polygon};
use std::collections::HashSet;

fn europe() -> Vec<CountryShape> {
    vec![
        shape("France", "FRA", &[[2.0, 46.0], [3.0, 47.0], [1.0, 48.0]], 0),
        shape("France", "FRA", &[[9.0, 42.0], [9.5, 42.5], [9.0, 43.0]], 0),
        shape("Francistan", "FRS", TRIANGLE, 1),
        shape("Germany", "DEU", TRIANGLE, 2),
        shape("French Guiana", "GUF", TRIANGLE, 3),
    ]
}

#[test]
fn empty_query_returns_nothing() {
    let shapes = europe();
    assert!(search(&shapes, "").is_empty());
    assert!(search(&[], "").is_empty());
}

#[test]
fn substring_match_keeps_first_occurrence_order() {
    let shapes = europe();
    let hits = search(&shapes, "franc");
    assert_eq!(names(&hits), vec!["France", "Francistan"]);
    // the first France polygon wins the dedup
    assert!(std::ptr::eq(hits[0], &shapes[0]));
}

#[test]
fn matching_is_case_insensitive() {
    let shapes = europe();
    let upper = search(&shapes, "FRANCE");
    let lower = search(&shapes, "france");
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["France"]);
    assert_eq!(names(&search(&shapes, "mAnY")), vec!["Germany"]);
}

#[test]
fn results_are_unique_by_code() {
    let shapes = europe();
    let hits = search(&shapes, "fr");
    let codes: HashSet<&str> = hits.iter().map(|s| s.admin_code()).collect();
    assert_eq!(codes.len(), hits.len());
    assert_eq!(names(&hits), vec!["France", "Francistan", "French Guiana"]);
}

#[test]
fn results_are_capped_at_eight() {
    let shapes: Vec<CountryShape> = (0..20)
        .map(|i| shape(&format!("Land {i}"), &format!("L{i:02}"), TRIANGLE, i))
        .collect();

    let hits = search(&shapes, "land");
    assert_eq!(hits.len(), 8);
    let expected: Vec<String> = (0..8).map(|i| format!("Land {i}")).collect();
    assert_eq!(names(&hits), expected);
}

#[test]
fn cap_counts_distinct_countries_not_polygons() {
    // 12 islands of one country followed by 3 other countries
    let mut shapes: Vec<CountryShape> = (0..12)
        .map(|_| shape("Island Nation", "ISN", TRIANGLE, 0))
        .collect();
    shapes.push(shape("Island Kingdom", "ISK", TRIANGLE, 1));
    shapes.push(shape("Iceland", "ISL", TRIANGLE, 2));
    shapes.push(shape("Ireland", "IRL", TRIANGLE, 3));

    let hits = search(&shapes, "land");
    assert_eq!(
        names(&hits),
        vec!["Island Nation", "Island Kingdom", "Iceland", "Ireland"]
    );
}

#[test]
fn no_match_returns_empty() {
    let shapes = europe();
    assert!(search(&shapes, "atlantis").is_empty());
}

#[test]
fn shapes_without_name_never_match() {
    let mut shapes = europe();
    shapes[3].properties.remove("ADMIN");
    assert!(search(&shapes, "germ").is_empty());
}

#[test]
fn accent_folding_is_opt_in() {
    let shapes = vec![shape("Côte d'Ivoire", "CIV", TRIANGLE, 0)];

    assert!(search(&shapes, "cote").is_empty());
    assert_eq!(search(&shapes, "CÔTE").len(), 1);

    let config = IndexConfig {
        fold_accents: true,
        ..IndexConfig::default()
    };
    let index = CountryIndex::with_config(&shapes, config);
    assert_eq!(names(&index.search("cote")), vec!["Côte d'Ivoire"]);
}

#[test]
fn custom_property_keys_and_limit() {
    let shapes: Vec<CountryShape> = ["Chad", "Chile", "China"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut s = shape(name, "", TRIANGLE, i);
            s.properties.insert("NAME".into(), (*name).into());
            s.properties.insert("ISO".into(), format!("C{i}").into());
            s
        })
        .collect();

    let config = IndexConfig {
        name_key: "NAME".into(),
        code_key: "ISO".into(),
        max_results: 2,
        fold_accents: false,
    };
    let index = CountryIndex::with_config(&shapes, config);
    let hits = index.search("ch");
    assert_eq!(hits.len(), 2);
    assert_eq!(index.label(hits[1]), "Chile");
    assert_eq!(index.search_positions("ch"), vec![0, 1]);
}

#[test]
fn find_by_code_returns_every_polygon() {
    let shapes = europe();
    let index = CountryIndex::new(&shapes);
    assert_eq!(index.find_by_code("fra").len(), 2);
    assert_eq!(index.find_by_code(" DEU ").len(), 1);
    assert!(index.find_by_code("").is_empty());
    assert!(index.find_by_code("XXX").is_empty());
}

#[test]
fn countries_lists_first_shape_per_code() {
    let shapes = europe();
    let index = CountryIndex::new(&shapes);
    assert_eq!(
        names(&index.countries()),
        vec!["France", "Francistan", "Germany", "French Guiana"]
    );
    assert_eq!(index.distinct_codes(), 4);
}

#[test]
fn result_keys_distinguish_islands() {
    let shapes = europe();
    let index = CountryIndex::new(&shapes);
    assert_eq!(index.result_key(&shapes[0]), "FRA:2,46");
    assert_eq!(index.result_key(&shapes[1]), "FRA:9,42");
}

#[test]
fn centroid_is_mean_of_outer_ring() {
    let square = shape(
        "Square",
        "SQR",
        &[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]],
        0,
    );
    let c = centroid(&square).unwrap();
    assert_eq!(c.longitude, 1.0);
    assert_eq!(c.latitude, 1.0);

    let france = shape("France", "FRA", &[[2.0, 46.0], [3.0, 47.0], [1.0, 48.0]], 0);
    let c = centroid(&france).unwrap();
    assert_eq!(c.longitude, 2.0);
    assert_eq!(c.latitude, 47.0);
}

#[test]
fn centroid_of_single_point_is_that_point() {
    let dot = shape("Dot", "DOT", &[[12.5, -33.25]], 0);
    let c = centroid(&dot).unwrap();
    assert_eq!((c.longitude, c.latitude), (12.5, -33.25));
}

#[test]
fn centroid_ignores_holes() {
    let mut donut = shape(
        "Donut",
        "DNT",
        &[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]],
        0,
    );
    donut
        .geometry
        .coordinates
        .push(ring(&[[100.0, 100.0], [101.0, 100.0], [101.0, 101.0]]));
    let c = centroid(&donut).unwrap();
    assert_eq!((c.longitude, c.latitude), (2.0, 2.0));
}

#[test]
fn centroid_of_empty_ring_is_an_error() {
    let empty = CountryShape {
        properties: props("Void", "VOI"),
        geometry: Polygon {
            coordinates: vec![vec![]],
        },
        shape_index: 7,
    };
    match centroid(&empty) {
        Err(GeoError::EmptyRing { shape_index }) => assert_eq!(shape_index, 7),
        other => panic!("expected EmptyRing, got {other:?}"),
    }

    let no_rings = CountryShape {
        geometry: Polygon {
            coordinates: vec![],
        },
        ..empty
    };
    assert!(centroid(&no_rings).is_err());
}

#[test]
fn centroid_that_overflows_is_an_error() {
    let huge = shape("Huge", "HUG", &[[1e308, 1e308], [1e308, 1e308]], 4);
    match centroid(&huge) {
        Err(GeoError::NonFiniteCentroid { shape_index }) => assert_eq!(shape_index, 4),
        other => panic!("expected NonFiniteCentroid, got {other:?}"),
    }
}

#[test]
fn admin_accessors_read_default_keys_only() {
    let mut s = shape("", "", TRIANGLE, 0);
    s.properties.clear();
    s.properties.insert("NAME".into(), "Chad".into());
    s.properties.insert("ISO".into(), "TCD".into());

    assert_eq!(s.admin_name(), "");
    assert_eq!(s.admin_code(), "");

    let config = IndexConfig {
        name_key: "NAME".into(),
        code_key: "ISO".into(),
        ..IndexConfig::default()
    };
    assert_eq!(config.name_of(&s), Some("Chad"));
    assert_eq!(config.code_of(&s), Some("TCD"));
}

#![allow(dead_code)]

use geoglobe_core::raw::{Position, RawFeature, RawGeometry, Ring};
use geoglobe_core::{CountryShape, Polygon};
use serde_json::json;

pub fn ring(points: &[[f64; 2]]) -> Ring {
    points.iter().map(|p| Position::new(p[0], p[1])).collect()
}

pub fn props(name: &str, code: &str) -> serde_json::Map<String, serde_json::Value> {
    match json!({ "ADMIN": name, "ADM0_A3": code }) {
        serde_json::Value::Object(m) => m,
        _ => unreachable!(),
    }
}

pub fn polygon_feature(name: &str, code: &str, outer: &[[f64; 2]]) -> RawFeature {
    RawFeature {
        properties: Some(props(name, code)),
        geometry: Some(RawGeometry::Polygon {
            coordinates: Some(vec![ring(outer)]),
        }),
    }
}

pub fn multi_feature(name: &str, code: &str, outers: &[&[[f64; 2]]]) -> RawFeature {
    RawFeature {
        properties: Some(props(name, code)),
        geometry: Some(RawGeometry::MultiPolygon {
            coordinates: Some(outers.iter().map(|o| vec![ring(o)]).collect()),
        }),
    }
}

pub fn shape(name: &str, code: &str, outer: &[[f64; 2]], shape_index: usize) -> CountryShape {
    CountryShape {
        properties: props(name, code),
        geometry: Polygon {
            coordinates: vec![ring(outer)],
        },
        shape_index,
    }
}

pub const TRIANGLE: &[[f64; 2]] = &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];

pub fn names<'a>(shapes: &[&'a CountryShape]) -> Vec<&'a str> {
    shapes.iter().map(|s| s.admin_name()).collect()
}

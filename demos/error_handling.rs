//! Error handling example for geoglobe-rs
//!
//! This example demonstrates how load failures and malformed features are
//! reported, and how the globe keeps running without them.

use geoglobe_core::loader;
use geoglobe_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geoglobe-rs Error Handling Example ===\n");

    // Example 1: a dataset that cannot be loaded
    println!("--- Example 1: Missing dataset ---");
    match ShapeSet::load_from_path("does/not/exist.geojson") {
        Ok(set) => println!("  Loaded {} shapes", set.len()),
        Err(e) => {
            println!("  ✗ {e}");
            println!("  dataset load error: {}", e.is_dataset_load());
        }
    }
    let set = load_or_empty("does/not/exist.geojson");
    println!("  Recovered with {} shapes\n", set.len());

    // Example 2: a document that is not GeoJSON
    println!("--- Example 2: Invalid JSON ---");
    let mut session = GlobeSession::default();
    session.load_result(ShapeSet::from_json_str("{ \"features\": [ oops"));
    session.set_query("fr");
    println!("  Results after failed load: {}\n", session.result_count());

    // Example 3: malformed features, strict vs lenient
    println!("--- Example 3: Malformed features ---");
    let raw = loader::parse_collection(
        r#"{ "features": [
            { "properties": { "ADMIN": "Good", "ADM0_A3": "GOO" },
              "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [2, 0], [1, 2]]] } },
            { "properties": { "ADMIN": "Broken", "ADM0_A3": "BRK" },
              "geometry": { "type": "Polygon", "coordinates": [[]] } },
            { "properties": { "ADMIN": "Marker" },
              "geometry": { "type": "Point", "coordinates": [0, 0] } }
        ]}"#,
    )?;

    match flatten(&raw.features) {
        Ok(shapes) => println!("  strict: {} shapes", shapes.len()),
        Err(e) => println!("  strict: ✗ {e}"),
    }

    let (shapes, errors) = flatten_lenient(&raw.features);
    println!("  lenient: {} shapes, {} skipped", shapes.len(), errors.len());
    for e in &errors {
        println!("    - {e}");
    }
    println!();

    // Example 4: centroid of a shape without points
    println!("--- Example 4: Empty outer ring ---");
    let hollow = CountryShape {
        properties: Default::default(),
        geometry: Polygon {
            coordinates: vec![Vec::new()],
        },
        shape_index: 0,
    };
    match centroid(&hollow) {
        Ok(p) => println!("  centroid: {p:?}"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}

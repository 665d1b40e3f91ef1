//! Session flow example for geoglobe-rs
//!
//! Walks through what a globe page does: load the dataset, type into the
//! search box, pick a result, react to hover. A console renderer stands in
//! for the 3D widget.

use geoglobe_core::prelude::*;

struct ConsoleGlobe;

impl GlobeRenderer for ConsoleGlobe {
    fn set_polygons(&mut self, shapes: &[CountryShape]) {
        println!("  [globe] polygonsData: {} shapes", shapes.len());
    }

    fn point_of_view(&mut self, target: PointOfView, duration_ms: u32) {
        println!(
            "  [globe] pointOfView lat {:.3} lng {:.3} alt {} over {duration_ms} ms",
            target.latitude, target.longitude, target.altitude
        );
    }
}

fn main() -> Result<()> {
    println!("=== geoglobe-rs Session Flow Example ===\n");

    let mut globe = ConsoleGlobe;
    let config = IndexConfig {
        fold_accents: true,
        ..IndexConfig::default()
    };
    let mut session = GlobeSession::new(config, FocusConfig::default(), GlobeStyle::default());

    println!("--- Loading ---");
    session.load_result(ShapeSet::load());
    session.sync_polygons(&mut globe);
    println!();

    println!("--- Typing ---");
    for text in ["c", "co", "cote", ""] {
        session.set_query(text);
        let names: Vec<_> = session.results().iter().map(|s| s.admin_name()).collect();
        println!("  '{text}' -> {names:?}");
    }
    println!();

    println!("--- Selecting ---");
    session.set_query("ital");
    match session.select(0, &mut globe) {
        Some(_) => println!(
            "  query is now '{}', {} result(s) left, hovered {:?}",
            session.query(),
            session.result_count(),
            session.hovered_code()
        ),
        None => println!("  nothing to select"),
    }
    println!();

    println!("--- Hover styling ---");
    session.hover(Some("DEU"));
    for shape in session.index().countries() {
        let style = session.style_for(shape);
        println!(
            "  {:<40} altitude {:<5} cap {}",
            session.label(shape),
            style.altitude,
            style.cap_color
        );
    }
    session.hover(None);

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! Basic usage example for geoglobe-rs
//!
//! This example demonstrates how to:
//! - Load and flatten the bundled country dataset
//! - List countries and their polygons
//! - Search by name the way the globe's search box does
//! - Compute a camera target for a match

use geoglobe_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geoglobe-rs Basic Usage Example ===\n");

    println!("Loading country dataset...");
    let set = ShapeSet::load()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: dataset statistics
    println!("--- Example 1: Dataset statistics ---");
    let stats = set.stats();
    println!("Features: {}", stats.features);
    println!("Single polygons: {}", stats.shapes);
    println!("Countries: {}", stats.countries);
    println!("Skipped: {}\n", stats.skipped);

    let index = set.index();

    // Example 2: one entry per country
    println!("--- Example 2: List all countries ---");
    for (i, shape) in index.countries().iter().enumerate() {
        println!("{}. {} ({})", i + 1, shape.admin_name(), shape.admin_code());
    }
    println!();

    // Example 3: every polygon of a country
    println!("--- Example 3: Polygons of a country ---");
    let italy = index.find_by_code("ITA");
    println!("Italy has {} polygons", italy.len());
    for shape in &italy {
        println!(
            "  shape #{}: {} outer ring points",
            shape.shape_index,
            shape.outer_ring().len()
        );
    }
    println!();

    // Example 4: search box
    println!("--- Example 4: Search by name ---");
    for query in ["fr", "LAND", "xyz"] {
        let hits = index.search(query);
        println!("'{query}': {} match(es)", hits.len());
        for shape in hits {
            println!("  - {} [{}]", shape.admin_name(), index.result_key(shape));
        }
    }
    println!();

    // Example 5: centroid and camera target
    println!("--- Example 5: Camera target ---");
    if let Some(shape) = index.search("germany").first() {
        let center = centroid(shape)?;
        let target = PointOfView::over(center, FocusConfig::default().altitude);
        println!(
            "{}: lat {:.3}, lng {:.3}, altitude {}",
            shape.admin_name(),
            target.latitude,
            target.longitude,
            target.altitude
        );
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

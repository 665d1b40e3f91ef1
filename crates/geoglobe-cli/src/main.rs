//! geoglobe-cli — Command-line interface for geoglobe-core
//!
//! This binary inspects a country dataset the way the globe sees it: after
//! flattening every `MultiPolygon` into single polygons.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geoglobe-cli stats
//!
//! - List all countries (first polygon of each)
//!   $ geoglobe-cli countries
//!
//! - Search like the globe's search box does
//!   $ geoglobe-cli search fran
//!
//! - Every polygon of a country, with centroids
//!   $ geoglobe-cli country FRA
//!
//! - Camera target for the first match
//!   $ geoglobe-cli focus germany --json
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample dataset bundled with `geoglobe-core`.
//! Use `--input <path>` for a custom `.geojson` / `.geojson.gz` file.
//! A dataset that cannot be loaded is reported and treated as empty, the
//! same way the globe keeps running without overlays.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Result;
use clap::Parser;
use geoglobe_core::config::IndexConfig;
use geoglobe_core::loader::{self, recover};
use geoglobe_core::model::centroid;
use geoglobe_core::traits::PointOfView;
use geoglobe_core::{CountryIndex, ShapeSet};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    let set = recover(load_dataset(&args));

    let config = IndexConfig {
        name_key: args.name_key.clone(),
        code_key: args.code_key.clone(),
        fold_accents: args.fold_accents,
        ..IndexConfig::default()
    };
    let index = set.index_with(config);

    match &args.command {
        Commands::Stats => {
            let stats = set.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Features: {}", stats.features);
                println!("  Shapes (single polygons): {}", stats.shapes);
                println!("  Countries: {}", stats.countries);
                println!("  Skipped (malformed): {}", stats.skipped);
            }
        }

        Commands::Countries => {
            for c in index.countries() {
                println!("{} ({})", index.label(c), code_of(&index, c));
            }
        }

        Commands::Search { query } => {
            let hits = index.search(query);
            if args.json {
                let rows: Vec<_> = hits
                    .iter()
                    .map(|s| {
                        json!({
                            "key": index.result_key(s),
                            "name": index.label(s),
                            "code": code_of(&index, s),
                            "shapeIndex": s.shape_index,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if hits.is_empty() {
                println!("No countries found matching: {query}");
            } else {
                for s in hits {
                    println!("{} ({})", index.label(s), code_of(&index, s));
                }
            }
        }

        Commands::Country { code } => {
            let shapes = index.find_by_code(code);
            match shapes.first() {
                None => eprintln!("No country found for: {code}"),
                Some(first) => {
                    println!("Country: {}", index.label(first));
                    println!("Code: {}", code_of(&index, first));
                    println!("Polygons: {}", shapes.len());
                    for (i, s) in shapes.iter().enumerate() {
                        match centroid(s) {
                            Ok(c) => println!(
                                "  #{i}: {} points, centroid lat {:.4} lng {:.4}",
                                s.outer_ring().len(),
                                c.latitude,
                                c.longitude
                            ),
                            Err(e) => println!("  #{i}: {e}"),
                        }
                    }
                }
            }
        }

        Commands::Focus {
            query,
            altitude,
            duration_ms,
        } => match index.search(query).first() {
            None => eprintln!("No countries found matching: {query}"),
            Some(shape) => {
                let target = PointOfView::over(centroid(shape)?, *altitude);
                if args.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "name": index.label(shape),
                            "pointOfView": target,
                            "durationMs": duration_ms,
                        }))?
                    );
                } else {
                    println!(
                        "{}: lat {:.4} lng {:.4} altitude {} over {} ms",
                        index.label(shape),
                        target.latitude,
                        target.longitude,
                        target.altitude,
                        duration_ms
                    );
                }
            }
        },
    }

    Ok(())
}

fn load_dataset(args: &CliArgs) -> geoglobe_core::Result<ShapeSet> {
    #[cfg(feature = "fetch")]
    if let Some(url) = &args.url {
        return ShapeSet::fetch(url);
    }

    let path = args
        .input
        .clone()
        .unwrap_or_else(loader::default_dataset_path);
    info!(path = %path.display(), "using dataset");
    ShapeSet::load_from_path(path)
}

fn code_of<'s>(index: &CountryIndex<'_>, shape: &'s geoglobe_core::CountryShape) -> &'s str {
    index.config().code_of(shape).unwrap_or("")
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoglobe-cli
#[derive(Debug, Parser)]
#[command(
    name = "geoglobe-cli",
    version,
    about = "CLI for searching and inspecting country datasets used by the globe"
)]
pub struct CliArgs {
    /// Path to the input GeoJSON (or .geojson.gz) file (default: bundled sample)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Download the dataset from this URL instead of reading a file
    #[cfg(feature = "fetch")]
    #[arg(long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// Match accents loosely ("cote" finds "Côte d'Ivoire")
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Property holding the country name
    #[arg(long = "name-key", global = true, default_value = "ADMIN")]
    pub name_key: String,

    /// Property holding the admin code
    #[arg(long = "code-key", global = true, default_value = "ADM0_A3")]
    pub code_key: String,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List every country once
    Countries,

    /// Search countries by name (case-insensitive substring, max 8 results)
    Search {
        /// Text to search for
        query: String,
    },

    /// Show every polygon of a country with its centroid
    Country {
        /// Admin code (e.g. FRA)
        code: String,
    },

    /// Print the camera target for the first search match
    Focus {
        /// Text to search for
        query: String,

        /// Camera altitude in globe radii
        #[arg(long, default_value_t = geoglobe_core::config::DEFAULT_FOCUS_ALTITUDE)]
        altitude: f64,

        /// Animation duration in milliseconds
        #[arg(long, default_value_t = geoglobe_core::config::DEFAULT_FOCUS_DURATION_MS)]
        duration_ms: u32,
    },
}

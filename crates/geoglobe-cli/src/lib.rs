//! geoglobe-cli
//! ============
//!
//! Command-line interface for the `geoglobe-core` country index.
//!
//! This crate primarily provides a binary (`geoglobe-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! geoglobe-cli --help
//! geoglobe-cli stats
//! geoglobe-cli search fran
//! geoglobe-cli --input countries.geojson.gz country FRA
//! geoglobe-cli focus germany --json
//! ```
//!
//! For programmatic access use the `geoglobe-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.

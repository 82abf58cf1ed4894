//! bizdb-cli
//! ==========
//!
//! Command-line interface for the `bizdb-core` business listings database.
//!
//! This crate primarily provides a binary (`bizdb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! bizdb --help
//! bizdb stats
//! bizdb hotels --radius 10
//! bizdb restaurants --cuisine Italian
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `bizdb-core` crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.

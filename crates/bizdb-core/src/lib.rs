// crates/bizdb-core/src/lib.rs

//! # bizdb-core
//!
//! In-memory business listings database with category views and haversine
//! radius search.
//!
//! The pipeline: loader (JSON / NDJSON, optionally gzip) → normalizer →
//! classifier (hotel / restaurant views, precomputed at load) → per-query
//! geo filter. See [`BizDb`] and the [`BizSearch`] trait.

pub mod common;
pub mod error;
pub mod filter;
pub mod geo;
pub mod loader; // The public loader
pub mod model;
pub mod text;
pub mod traits;
// Shared raw input (used by the loaders)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{BizError, Result};
pub use crate::common::DbStats;
pub use crate::filter::HotelRule;
pub use crate::geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use crate::loader::LoadReport;
pub use crate::model::{BizDb, Business, DefaultBizDb, Query, SearchHit};
pub use crate::text::{equals_folded, fold_key};
// Export the Search Trait (crucial for users!)
pub use crate::traits::{BizSearch, CategoryMatch, DefaultBackend, StandardBackend, StoreBackend};

#[cfg(feature = "fetch")]
pub use crate::loader::fetch::{Clock, DownloadCache, SystemClock};

// crates/bizdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, binary caching) and
//! delegates payload parsing to [`ndjson`].

pub(crate) mod common_io;
pub mod ndjson;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use ndjson::LoadReport;

use crate::error::Result;
use crate::filter::HotelRule;
use crate::model::{BizDb, CACHE_SUFFIX};
use crate::traits::DefaultBackend;
use once_cell::sync::OnceCell;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

static BIZ_DB_CACHE: OnceCell<BizDb<DefaultBackend>> = OnceCell::new();

pub const DATA_URL: &str = "https://www.dropbox.com/scl/fi/9lzttqolt0ojmdiian81r/yelp_academic_dataset_business.json?rlkey=0xz2qnm491hudpfspdcfmr4uo&dl=1";

impl BizDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "yelp_academic_dataset_business.json"
    }

    pub fn dataset_url() -> &'static str {
        DATA_URL
    }

    /// Process-wide memoized load of the default dataset with the default
    /// hotel rule. Repeated calls within one process reuse the first result.
    pub fn load() -> Result<Self> {
        BIZ_DB_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_from_path(dir.join(file), &HotelRule::default())
            })
            .cloned()
    }

    /// **Smart Load:** reuses the binary cache next to the source when it is
    /// fresh, otherwise parses the source and refreshes the cache.
    pub fn load_from_path(path: impl AsRef<Path>, rule: &HotelRule) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        if Self::is_cache_fresh(path, &cache_path) {
            if let Ok(db) = Self::load_binary_file(&cache_path) {
                debug!(cache = %cache_path.display(), "reusing binary cache");
                return Ok(db);
            }
        }

        let (db, _) = Self::load_with_report(path, rule)?;

        if let Err(err) = db.save_as(&cache_path) {
            warn!(cache = %cache_path.display(), %err, "could not refresh binary cache");
        }

        Ok(db)
    }

    /// Parses the JSON / NDJSON source, bypassing the binary cache, and
    /// returns the parse counts alongside the database.
    pub fn load_with_report(path: impl AsRef<Path>, rule: &HotelRule) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let (raw, report) = ndjson::read_records(reader)?;
        if report.skipped > 0 {
            warn!(
                source = %path.display(),
                skipped = report.skipped,
                "malformed lines were skipped during load"
            );
        }
        Ok((crate::model::convert::from_raw(raw, rule), report))
    }

    /// Parses the source without the cache layer.
    pub fn load_raw_json(path: impl AsRef<Path>, rule: &HotelRule) -> Result<Self> {
        Self::load_with_report(path, rule).map(|(db, _)| db)
    }

    /// Writes the database as a binary cache file (gzip-compressed under the
    /// `compact` feature).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);

        #[cfg(feature = "compact")]
        let mut encoder: Box<dyn Write> = Box::new(GzEncoder::new(writer, Compression::default()));
        #[cfg(not(feature = "compact"))]
        let mut encoder: Box<dyn Write> = Box::new(writer);

        let bytes = self.to_bytes()?;
        encoder.write_all(&bytes)?;
        encoder.flush()?;
        Ok(())
    }

    // --- Internal helpers ---

    fn load_binary_file(path: &Path) -> Result<Self> {
        let mut reader = common_io::open_stream(path)?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data)?)
    }

    fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
        let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
            Ok(m) => m,
            Err(_) => return false,
        };
        match fs::metadata(source_path).and_then(|m| m.modified()) {
            Ok(source_time) => source_time <= cache_time,
            Err(_) => false,
        }
    }
}

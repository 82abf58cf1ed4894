// crates/bizdb-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

//! Dataset download with a bounded reuse window.
//!
//! The cache is explicit state keyed by source URL, with an injected clock
//! so expiry is testable. Network failure is fatal to the caller; there are
//! no retries.

use crate::error::Result;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

/// Time source for cache-expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Download cache keyed by source URL.
///
/// Within the expiry window a repeated fetch of the same URL reuses the
/// on-disk copy instead of re-downloading.
pub struct DownloadCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    fetched: HashMap<String, SystemTime>,
}

impl DownloadCache {
    /// Downloads are reused for one hour unless configured otherwise.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            fetched: HashMap::new(),
        }
    }

    /// Fetches `url` into `dest`, reusing the previous download when it is
    /// still within the expiry window and the file is still present.
    pub fn fetch(&mut self, url: &str, dest: impl AsRef<Path>) -> Result<PathBuf> {
        let dest = dest.as_ref();

        if self.is_fresh(url) && dest.exists() {
            debug!(url, dest = %dest.display(), "reusing cached download");
            return Ok(dest.to_path_buf());
        }

        info!(url, dest = %dest.display(), "downloading dataset");
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut response = reqwest::blocking::get(url)?.error_for_status()?;
        let mut file = File::create(dest)?;
        io::copy(&mut response, &mut file)?;

        self.fetched.insert(url.to_string(), self.clock.now());
        Ok(dest.to_path_buf())
    }

    fn is_fresh(&self, url: &str) -> bool {
        self.fetched.get(url).is_some_and(|at| {
            self.clock
                .now()
                .duration_since(*at)
                .map(|age| age <= self.ttl)
                .unwrap_or(false)
        })
    }
}

/// Simple aggregate statistics for the database.
///
/// Returned by [`BizSearch::stats`](crate::traits::BizSearch::stats); counts
/// reflect the materialized in-memory database after normalization, so
/// records dropped for unusable coordinates are not included.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub businesses: usize,
    pub hotels: usize,
    pub restaurants: usize,
}

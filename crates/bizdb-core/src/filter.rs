// crates/bizdb-core/src/filter.rs

//! Category classification predicates.
//!
//! Classification is substring-based over the free-form category text. The
//! hotel predicate is a configurable [`HotelRule`] value because its
//! price-range condition is a dataset-specific heuristic ("hotel offers
//! on-site dining"), not a principled rule.

use crate::text::fold_key;
use serde_json::{Map, Value};

/// Attribute key used as a proxy for "hotel offers on-site dining".
pub const PRICE_RANGE_KEY: &str = "RestaurantsPriceRange2";

pub const HOTEL_CATEGORY: &str = "Hotels";
pub const RESTAURANT_CATEGORY: &str = "Restaurants";

/// Category substrings that disqualify a record from the hotel view.
pub const EXCLUDED_CATEGORIES: &[&str] = &["Transport", "Distilleries"];

/// Predicate selecting hotels that offer on-site dining.
#[derive(Debug, Clone)]
pub struct HotelRule {
    /// Substring that must appear in the category text.
    pub category: String,
    /// Attribute key that must be present in the record's attributes map.
    pub price_range_key: String,
    /// Category substrings that disqualify a record (matched case-insensitively).
    pub excluded: Vec<String>,
    /// When true, the `category` check matches the raw text byte-for-byte
    /// while the exclusion check still folds case. The source dataset's
    /// category casing is stable, so this is the default.
    pub case_sensitive: bool,
}

impl Default for HotelRule {
    fn default() -> Self {
        Self {
            category: HOTEL_CATEGORY.to_string(),
            price_range_key: PRICE_RANGE_KEY.to_string(),
            excluded: EXCLUDED_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            case_sensitive: true,
        }
    }
}

impl HotelRule {
    /// True when `categories` and `attributes` satisfy the hotel predicate.
    ///
    /// A missing or non-object attributes value never matches; no error is
    /// raised for malformed input.
    pub fn matches(&self, categories: &str, attributes: Option<&Map<String, Value>>) -> bool {
        let category_hit = if self.case_sensitive {
            categories.contains(self.category.as_str())
        } else {
            fold_key(categories).contains(&fold_key(&self.category))
        };
        if !category_hit {
            return false;
        }

        let Some(attrs) = attributes else {
            return false;
        };
        if !attrs.contains_key(&self.price_range_key) {
            return false;
        }

        let folded = fold_key(categories);
        !self
            .excluded
            .iter()
            .any(|ex| folded.contains(&fold_key(ex)))
    }
}

/// True when the category text marks a restaurant (case-insensitive).
/// Cuisine narrowing happens at query time via
/// [`CategoryMatch::in_category`](crate::traits::CategoryMatch::in_category).
pub fn is_restaurant(categories: &str) -> bool {
    fold_key(categories).contains(&fold_key(RESTAURANT_CATEGORY))
}

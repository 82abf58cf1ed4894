// crates/bizdb-core/src/traits.rs
use crate::common::DbStats;
use crate::model::flat::{BizDb, Business};
use crate::model::search::{Query, SearchHit};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the database.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so databases can be cached
/// via bincode.
pub trait StoreBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Serialize, Deserialize)]
pub struct DefaultBackend;

impl StoreBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Convenient alias used in examples and the CLI.
pub type StandardBackend = DefaultBackend;

/// Category-text matching helpers for types that expose the free-form,
/// comma-delimited category string of a record.
///
/// [`CategoryMatch::in_category`] folds case and diacritics via [`fold_key`];
/// [`CategoryMatch::in_category_exact`] is a byte-for-byte substring check.
/// Both exist because the classifier deliberately mixes the two (see
/// `filter::HotelRule`).
pub trait CategoryMatch {
    /// Returns the raw category text used for matching.
    fn categories_str(&self) -> &str;

    /// Case-insensitive and accent-insensitive substring match.
    #[inline]
    fn in_category(&self, q: &str) -> bool {
        fold_key(self.categories_str()).contains(&fold_key(q))
    }

    /// Case-sensitive substring match on the raw category text.
    #[inline]
    fn in_category_exact(&self, q: &str) -> bool {
        self.categories_str().contains(q)
    }
}

/// An iterator over businesses belonging to a classification view.
/// Box<dyn ...> allows different iterator shapes behind a single interface.
pub type BizIter<'a, B> = Box<dyn Iterator<Item = &'a Business<B>> + 'a>;

/// The Logic Trait.
/// Defines the search operations available on the database.
pub trait BizSearch<B: StoreBackend> {
    fn stats(&self) -> DbStats;

    /// All businesses, in dataset order.
    fn businesses(&self) -> &[Business<B>];

    /// The precomputed hotels-with-pricing view, in dataset order.
    fn hotel_view(&self) -> BizIter<'_, B>;

    /// The precomputed restaurant view, in dataset order.
    fn restaurant_view(&self) -> BizIter<'_, B>;

    /// Hotels within `query.radius_km` of the reference point.
    fn hotels_near<'a>(&'a self, query: &Query) -> Vec<SearchHit<'a, B>>;

    /// Restaurants within the radius, optionally narrowed by `query.cuisine`.
    fn restaurants_near<'a>(&'a self, query: &Query) -> Vec<SearchHit<'a, B>>;
}

impl<B: StoreBackend> CategoryMatch for Business<B> {
    fn categories_str(&self) -> &str {
        self.categories.as_ref()
    }
}

impl<B: StoreBackend> BizDb<B> {
    pub fn business_count(&self) -> usize {
        self.businesses.len()
    }
}

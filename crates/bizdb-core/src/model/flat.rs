// crates/bizdb-core/src/model/flat.rs
use crate::geo::GeoPoint;
use crate::traits::StoreBackend;
use serde::{Deserialize, Serialize};

/// The master database struct.
/// A flat vector of businesses plus precomputed classification views.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BizDb<B: StoreBackend> {
    /// Master list of all businesses, in dataset order.
    pub businesses: Vec<Business<B>>,
    /// Indices into `businesses` forming the hotels-with-pricing view.
    pub hotels: Vec<u32>,
    /// Indices into `businesses` forming the restaurant view.
    pub restaurants: Vec<u32>,
}

/// A normalized business record. Immutable after load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Business<B: StoreBackend> {
    pub name: B::Str,
    pub address: B::Str,
    pub city: B::Str,
    pub state: B::Str,
    pub postal_code: B::Str,
    /// Free-form comma-delimited tag string, e.g. "Hotels, Event Planning".
    pub categories: B::Str,
    /// Sorted (key, stringified value) pairs. `None` when the source record
    /// carried no usable attributes object.
    pub attributes: Option<Vec<(B::Str, B::Str)>>,
    /// Star rating, 0–5.
    pub stars: B::Float,
    pub latitude: B::Float,
    pub longitude: B::Float,
}

impl<B: StoreBackend> Business<B> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn address(&self) -> &str {
        self.address.as_ref()
    }

    pub fn city(&self) -> &str {
        self.city.as_ref()
    }

    pub fn state(&self) -> &str {
        self.state.as_ref()
    }

    pub fn postal_code(&self) -> &str {
        self.postal_code.as_ref()
    }

    pub fn categories(&self) -> &str {
        self.categories.as_ref()
    }

    pub fn stars(&self) -> f64 {
        B::float_to_f64(self.stars)
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(B::float_to_f64(self.latitude), B::float_to_f64(self.longitude))
    }

    /// True when the record has an attributes entry under `key`.
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes
            .as_ref()
            .is_some_and(|attrs| attrs.iter().any(|(k, _)| k.as_ref() == key))
    }

    /// Stringified attribute value under `key`, if any.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.as_ref().and_then(|attrs| {
            attrs
                .iter()
                .find(|(k, _)| k.as_ref() == key)
                .map(|(_, v)| v.as_ref())
        })
    }
}

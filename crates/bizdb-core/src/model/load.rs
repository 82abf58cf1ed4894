// crates/bizdb-core/src/model/load.rs
use crate::model::flat::BizDb;
use crate::traits::StoreBackend;
use bincode::Options;
use serde::{Deserialize, Serialize};

/// Deserialization size guard against malformed or malicious cache files.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

/// Bincode options shared by cache reads and writes. Read and write must
/// agree on the encoding, so both go through here.
pub(crate) fn cache_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_LIMIT)
        .allow_trailing_bytes()
}

impl<B: StoreBackend + Serialize + for<'de> Deserialize<'de>> BizDb<B> {
    /// Reconstructs the database from the serialized binary cache format.
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        cache_options().deserialize(data)
    }

    /// Serializes the database into the binary cache format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        cache_options().serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::HotelRule;
    use crate::model::convert::from_raw;
    use crate::model::DefaultBizDb;
    use serde_json::json;

    #[test]
    fn binary_round_trip_preserves_views() {
        let records = vec![serde_json::from_value(json!({
            "name": "Strip Suites",
            "categories": "Hotels, Event Planning",
            "attributes": {"RestaurantsPriceRange2": 2},
            "stars": 4.0,
            "latitude": 36.17,
            "longitude": -115.14
        }))
        .unwrap()];

        let db: DefaultBizDb = from_raw(records, &HotelRule::default());
        let bytes = db.to_bytes().unwrap();
        let restored = DefaultBizDb::from_bytes(&bytes).unwrap();

        assert_eq!(restored.businesses.len(), db.businesses.len());
        assert_eq!(restored.hotels, db.hotels);
        assert_eq!(restored.restaurants, db.restaurants);
        assert_eq!(restored.businesses[0].name(), "Strip Suites");
    }
}

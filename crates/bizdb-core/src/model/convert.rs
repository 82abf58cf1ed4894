// crates/bizdb-core/src/model/convert.rs
use crate::filter::{self, HotelRule};
use crate::geo::GeoPoint;
use crate::model::flat::{BizDb, Business};
use crate::raw::BusinessRaw;
use crate::traits::StoreBackend;
use serde_json::Value;
use tracing::warn;

/// **Standard Converter:** Raw -> Flat.
///
/// Normalizes raw records into [`Business`] entries and classifies them into
/// the hotel/restaurant views in the same pass, so searches never re-derive
/// category membership.
///
/// Records with missing or out-of-range coordinates are dropped (with a
/// logged count) since they can never satisfy a radius query.
pub fn from_raw<B: StoreBackend>(raw: Vec<BusinessRaw>, rule: &HotelRule) -> BizDb<B> {
    let mut db = BizDb {
        businesses: Vec::with_capacity(raw.len()),
        hotels: Vec::new(),
        restaurants: Vec::new(),
    };

    let mut dropped = 0usize;

    for r in raw {
        let (Some(lat), Some(lon)) = (r.latitude, r.longitude) else {
            dropped += 1;
            continue;
        };
        if !GeoPoint::new(lat, lon).is_valid() {
            dropped += 1;
            continue;
        }

        let categories = r.categories.as_deref().unwrap_or("");
        let id = db.businesses.len() as u32;

        if rule.matches(categories, r.attributes_object()) {
            db.hotels.push(id);
        }
        if filter::is_restaurant(categories) {
            db.restaurants.push(id);
        }

        let attributes = r.attributes_object().map(|map| {
            let mut kv: Vec<(B::Str, B::Str)> = map
                .iter()
                .map(|(k, v)| (B::str_from(k), B::str_from(&stringify(v))))
                .collect();
            kv.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));
            kv
        });

        db.businesses.push(Business {
            name: B::str_from(&r.name),
            address: B::str_from(r.address.as_deref().unwrap_or("")),
            city: B::str_from(r.city.as_deref().unwrap_or("")),
            state: B::str_from(r.state.as_deref().unwrap_or("")),
            postal_code: B::str_from(r.postal_code.as_deref().unwrap_or("")),
            categories: B::str_from(categories),
            attributes,
            stars: B::float_from(r.stars.unwrap_or(0.0)),
            latitude: B::float_from(lat),
            longitude: B::float_from(lon),
        });
    }

    if dropped > 0 {
        warn!(dropped, "records without usable coordinates were skipped");
    }

    db
}

fn stringify(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DefaultBackend;
    use serde_json::json;

    fn raw(v: Value) -> BusinessRaw {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn classifies_and_normalizes() {
        let records = vec![
            raw(json!({
                "name": "Strip Suites",
                "address": "1 Strip Blvd",
                "city": "Las Vegas",
                "state": "NV",
                "postal_code": "89109",
                "categories": "Hotels, Event Planning",
                "attributes": {"RestaurantsPriceRange2": 2, "WiFi": "free"},
                "stars": 4.5,
                "latitude": 36.17,
                "longitude": -115.14
            })),
            raw(json!({
                "name": "Pasta Corner",
                "categories": "Restaurants, Italian",
                "stars": 4.0,
                "latitude": 36.16,
                "longitude": -115.15
            })),
            raw(json!({
                "name": "Hotel Shuttle Co",
                "categories": "Hotels, Transportation",
                "attributes": {"RestaurantsPriceRange2": 1},
                "latitude": 36.18,
                "longitude": -115.13
            })),
        ];

        let db = from_raw::<DefaultBackend>(records, &HotelRule::default());

        assert_eq!(db.businesses.len(), 3);
        assert_eq!(db.hotels, vec![0]);
        assert_eq!(db.restaurants, vec![1]);

        let hotel = &db.businesses[0];
        assert!(hotel.has_attribute("RestaurantsPriceRange2"));
        assert_eq!(hotel.attribute("RestaurantsPriceRange2"), Some("2"));
        assert_eq!(hotel.attribute("WiFi"), Some("free"));
        assert_eq!(hotel.stars(), 4.5);

        // Missing optional fields normalize to empty text, not errors.
        assert_eq!(db.businesses[1].address(), "");
    }

    #[test]
    fn drops_records_without_usable_coordinates() {
        let records = vec![
            raw(json!({"name": "No Coords", "categories": "Restaurants"})),
            raw(json!({
                "name": "Off Planet",
                "categories": "Restaurants",
                "latitude": 123.0,
                "longitude": 0.0
            })),
            raw(json!({
                "name": "Kept",
                "categories": "Restaurants",
                "latitude": 36.0,
                "longitude": -115.0
            })),
        ];

        let db = from_raw::<DefaultBackend>(records, &HotelRule::default());
        assert_eq!(db.businesses.len(), 1);
        assert_eq!(db.businesses[0].name(), "Kept");
        assert_eq!(db.restaurants, vec![0]);
    }
}

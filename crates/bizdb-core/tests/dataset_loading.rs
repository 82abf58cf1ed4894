//! End-to-end loading tests: NDJSON source on disk → parsed database →
//! binary cache reuse.

use bizdb_core::{BizDb, BizSearch, HotelRule, Query, StandardBackend};
use std::io::Write;

const NDJSON: &str = concat!(
    r#"{"name": "Strip Suites", "address": "1 Strip Blvd", "city": "Las Vegas", "state": "NV", "postal_code": "89109", "categories": "Hotels, Event Planning", "attributes": {"RestaurantsPriceRange2": 2}, "stars": 4.5, "latitude": 36.21486, "longitude": -115.1398}"#,
    "\n",
    r#"{"name": "Pasta Corner", "address": "2 Strip Blvd", "city": "Las Vegas", "state": "NV", "postal_code": "89109", "categories": "Restaurants, Italian", "stars": 4.0, "latitude": 36.1969, "longitude": -115.1398}"#,
    "\n",
    "not json at all",
    "\n",
    r#"{"name": "Depot Inn", "address": "3 Rail Way", "city": "Las Vegas", "state": "NV", "postal_code": "89101", "categories": "Hotels, Transportation", "attributes": {"RestaurantsPriceRange2": 1}, "stars": 3.0, "latitude": 36.17, "longitude": -115.14}"#,
    "\n",
);

fn write_dataset(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("businesses.json");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(NDJSON.as_bytes()).unwrap();
    path
}

#[test]
fn loads_ndjson_and_reports_skipped_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);

    let (db, report) =
        BizDb::<StandardBackend>::load_with_report(&path, &HotelRule::default()).unwrap();

    // 4 lines total, 1 malformed.
    assert_eq!(report.parsed, 3);
    assert_eq!(report.skipped, 1);

    let stats = db.stats();
    assert_eq!(stats.businesses, 3);
    assert_eq!(stats.hotels, 1);
    assert_eq!(stats.restaurants, 1);
}

#[test]
fn search_over_loaded_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);

    let db = BizDb::<StandardBackend>::load_raw_json(&path, &HotelRule::default()).unwrap();

    let query = Query::new(36.1699, -115.1398, 10.0);
    let hotels = db.hotels_near(&query);
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].business.name(), "Strip Suites");
    assert!((hotels[0].distance_km - 5.0).abs() < 0.01);

    let italian = Query::new(36.1699, -115.1398, 10.0).with_cuisine("Italian");
    let restaurants = db.restaurants_near(&italian);
    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0].business.name(), "Pasta Corner");
    assert!((restaurants[0].distance_km - 3.0).abs() < 0.01);

    let mexican = Query::new(36.1699, -115.1398, 10.0).with_cuisine("Mexican");
    assert!(db.restaurants_near(&mexican).is_empty());
}

#[test]
fn smart_load_writes_and_reuses_the_binary_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);
    let rule = HotelRule::default();

    let first = BizDb::<StandardBackend>::load_from_path(&path, &rule).unwrap();

    // A cache file appeared next to the source.
    let cache = dir
        .path()
        .read_dir()
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| e.file_name().to_string_lossy().contains("biz.bin"));
    assert!(cache.is_some(), "expected a binary cache next to the source");

    // A second load (served from the cache when fresh) sees the same data.
    let second = BizDb::<StandardBackend>::load_from_path(&path, &rule).unwrap();
    assert_eq!(second.stats().businesses, first.stats().businesses);
    assert_eq!(second.stats().hotels, first.stats().hotels);
    assert_eq!(second.stats().restaurants, first.stats().restaurants);
    assert_eq!(second.businesses[0].name(), first.businesses[0].name());
}

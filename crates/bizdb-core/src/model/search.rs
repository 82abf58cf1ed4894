// crates/bizdb-core/src/model/search.rs
use crate::common::DbStats;
use crate::geo::{haversine_km, GeoPoint};
use crate::model::flat::{BizDb, Business};
use crate::traits::{BizIter, BizSearch, CategoryMatch, StoreBackend};

/// A single search request. Created per interaction, discarded after
/// rendering.
#[derive(Debug, Clone)]
pub struct Query {
    /// Reference point the radius is measured from.
    pub center: GeoPoint,
    /// Inclusive search radius in kilometres.
    pub radius_km: f64,
    /// Optional cuisine keyword for restaurant searches.
    pub cuisine: Option<String>,
    /// Optional cap on the number of returned hits.
    pub limit: Option<usize>,
    /// Sort hits nearest-first instead of dataset order.
    pub nearest_first: bool,
}

impl Query {
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            center: GeoPoint::new(latitude, longitude),
            radius_km,
            cuisine: None,
            limit: None,
            nearest_first: false,
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn nearest_first(mut self) -> Self {
        self.nearest_first = true;
        self
    }
}

/// A business surviving the radius filter, with its derived distance
/// attached for display and optional sorting.
#[derive(Debug, Clone)]
pub struct SearchHit<'a, B: StoreBackend> {
    pub business: &'a Business<B>,
    pub distance_km: f64,
}

impl<B: StoreBackend> BizSearch<B> for BizDb<B> {
    fn stats(&self) -> DbStats {
        DbStats {
            businesses: self.businesses.len(),
            hotels: self.hotels.len(),
            restaurants: self.restaurants.len(),
        }
    }

    fn businesses(&self) -> &[Business<B>] {
        &self.businesses
    }

    fn hotel_view(&self) -> BizIter<'_, B> {
        Box::new(self.hotels.iter().map(|&i| &self.businesses[i as usize]))
    }

    fn restaurant_view(&self) -> BizIter<'_, B> {
        Box::new(
            self.restaurants
                .iter()
                .map(|&i| &self.businesses[i as usize]),
        )
    }

    fn hotels_near<'a>(&'a self, query: &Query) -> Vec<SearchHit<'a, B>> {
        within_radius(self.hotel_view(), query)
    }

    fn restaurants_near<'a>(&'a self, query: &Query) -> Vec<SearchHit<'a, B>> {
        match query.cuisine.as_deref().map(str::trim) {
            Some(cuisine) if !cuisine.is_empty() => {
                let narrowed = self
                    .restaurant_view()
                    .filter(move |b| b.in_category(cuisine));
                within_radius(narrowed, query)
            }
            _ => within_radius(self.restaurant_view(), query),
        }
    }
}

/// Radius filter over a candidate view. The boundary is inclusive:
/// a candidate at exactly `radius_km` survives.
fn within_radius<'a, B: StoreBackend>(
    candidates: impl Iterator<Item = &'a Business<B>>,
    query: &Query,
) -> Vec<SearchHit<'a, B>> {
    let mut hits: Vec<SearchHit<'a, B>> = candidates
        .filter_map(|b| {
            let distance_km = haversine_km(query.center, b.location());
            (distance_km <= query.radius_km).then_some(SearchHit {
                business: b,
                distance_km,
            })
        })
        .collect();

    if query.nearest_first {
        hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    }
    if let Some(limit) = query.limit {
        hits.truncate(limit);
    }
    hits
}

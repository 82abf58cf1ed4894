//! Result rendering: one block per surviving record, separated by a
//! fixed-width divider, in the order the search returned them.

use bizdb_core::{SearchHit, StandardBackend};

const SEPARATOR_WIDTH: usize = 40;

pub fn render_hits(hits: &[SearchHit<'_, StandardBackend>]) {
    if hits.is_empty() {
        println!("No matches within the given radius.");
        return;
    }
    for hit in hits {
        let b = hit.business;
        println!("Name: {}", b.name());
        println!(
            "Address: {}, {}, {}, {}",
            b.address(),
            b.city(),
            b.state(),
            b.postal_code()
        );
        println!("Rating: {} stars", b.stars());
        println!("Distance: {:.2} km", hit.distance_km);
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
    }
}

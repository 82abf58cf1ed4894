//! Prompt-driven search session mirroring the two search panels: hotel
//! suggestions by location, then a restaurant finder by cuisine.
//!
//! Every prompt shows its default; an empty line accepts it. `quit` (or EOF)
//! ends the session at any prompt.

use crate::output;
use anyhow::Result;
use bizdb_core::{BizSearch, DefaultBizDb, Query};
use std::io::{self, BufRead, Lines, StdinLock, Write};

const DEFAULT_LAT: f64 = 36.1699;
const DEFAULT_LON: f64 = -115.1398;
const DEFAULT_RADIUS_KM: f64 = 10.0;
const DEFAULT_CUISINE: &str = "Italian";

const MIN_RADIUS_KM: f64 = 1.0;
const MAX_RADIUS_KM: f64 = 20.0;

pub fn run(db: &DefaultBizDb) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("=== Hotel Suggestions Based on Location ===");
        let Some(lat) = prompt_f64(&mut lines, "Latitude", DEFAULT_LAT)? else {
            break;
        };
        let Some(lon) = prompt_f64(&mut lines, "Longitude", DEFAULT_LON)? else {
            break;
        };
        let Some(radius) = prompt_f64(&mut lines, "Search radius (km, 1-20)", DEFAULT_RADIUS_KM)?
        else {
            break;
        };
        let radius = radius.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);

        let query = Query::new(lat, lon, radius);
        output::render_hits(&db.hotels_near(&query));

        println!();
        println!("=== Restaurant Finder by Cuisine ===");
        let Some(cuisine) = prompt_text(&mut lines, "Cuisine type", DEFAULT_CUISINE)? else {
            break;
        };

        let query = Query::new(lat, lon, radius).with_cuisine(cuisine);
        output::render_hits(&db.restaurants_near(&query));

        let Some(again) = prompt_text(&mut lines, "Search again? (y/n)", "y")? else {
            break;
        };
        if !again.eq_ignore_ascii_case("y") && !again.eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}

/// Reads one answer. `None` means the session is over (EOF or `quit`);
/// an empty answer falls back to the default.
fn prompt_text(
    lines: &mut Lines<StdinLock<'_>>,
    label: &str,
    default: &str,
) -> Result<Option<String>> {
    print!("{label} [{default}]: ");
    io::stdout().flush()?;

    match lines.next() {
        None => Ok(None),
        Some(line) => {
            let line = line?;
            let answer = line.trim();
            if answer.eq_ignore_ascii_case("quit") || answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            Ok(Some(if answer.is_empty() {
                default.to_string()
            } else {
                answer.to_string()
            }))
        }
    }
}

/// Like [`prompt_text`] but re-asks until the answer parses as a number.
fn prompt_f64(
    lines: &mut Lines<StdinLock<'_>>,
    label: &str,
    default: f64,
) -> Result<Option<f64>> {
    loop {
        let Some(answer) = prompt_text(lines, label, &default.to_string())? else {
            return Ok(None);
        };
        match answer.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Not a number: {answer}"),
        }
    }
}

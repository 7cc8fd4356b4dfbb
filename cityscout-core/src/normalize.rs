//! Pure mappings from upstream payloads to stored records.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::error::{NormalizeError, Result};
use crate::payload::{BusinessEntry, DailyEntry, FilmEntry, GeocodeResponse};
use crate::records::{Business, Film, ForecastDay, NewPlace};

/// Poster images are served from the movie API's image CDN at a fixed size.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w200_and_h300_bestv2";

/// Display format for forecast dates, e.g. `Wed Jan 01 2020`.
const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Map the first geocoding candidate into a place, keeping the caller's
/// query string as the lookup key.
pub fn place_from_geocode(query: &str, payload: GeocodeResponse) -> Result<NewPlace> {
    let candidate = payload
        .results
        .into_iter()
        .next()
        .ok_or_else(|| NormalizeError::no_candidates("geocode", query))?;

    Ok(NewPlace {
        search_query: query.to_owned(),
        formatted_query: candidate.formatted_address,
        latitude: candidate.geometry.location.lat,
        longitude: candidate.geometry.location.lng,
    })
}

pub fn forecast_day(day: &DailyEntry, now: DateTime<Utc>) -> Result<ForecastDay> {
    Ok(ForecastDay {
        forecast: day.summary.clone(),
        time: display_date(day.time)?,
        created_at: now,
    })
}

/// Render unix seconds as a display date in UTC.
pub fn display_date(unix_secs: i64) -> Result<String> {
    let date = DateTime::<Utc>::from_timestamp(unix_secs, 0)
        .ok_or(NormalizeError::InvalidTimestamp { value: unix_secs })?;
    Ok(date.format(DISPLAY_DATE_FORMAT).to_string())
}

pub fn business(entry: BusinessEntry) -> Business {
    Business {
        name: entry.name,
        image_url: entry.image_url,
        price: entry.price,
        rating: entry.rating,
        url: entry.url,
    }
}

pub fn film(entry: FilmEntry) -> Film {
    let image_url = entry
        .poster_path
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}/{}", POSTER_BASE_URL, p.trim_start_matches('/')));

    Film {
        title: entry.title,
        overview: entry.overview,
        average_votes: entry.vote_average,
        total_votes: entry.vote_count,
        image_url,
        popularity: entry.popularity,
        released_on: entry.release_date.filter(|d| !d.is_empty()),
    }
}

/// Sort films most popular first. The sort is stable, so entries with equal
/// popularity keep their upstream order. NaN ranks last.
pub fn rank_by_popularity(entries: &mut [FilmEntry]) {
    entries.sort_by(|a, b| compare_popularity(b.popularity, a.popularity));
}

fn compare_popularity(a: f64, b: f64) -> Ordering {
    let key = |p: f64| if p.is_nan() { f64::NEG_INFINITY } else { p };
    key(a).total_cmp(&key(b))
}

/// Build the movie search text from a formatted address: the first two
/// comma-separated segments, re-joined with a comma.
///
/// `"Seattle, WA, USA"` becomes `"Seattle, WA"`.
pub fn movie_search_query(formatted_address: &str) -> String {
    formatted_address
        .split(',')
        .take(2)
        .collect::<Vec<_>>()
        .join(",")
}

//! Upstream response shapes
//!
//! Only the fields the normalizers read are modelled; everything else in
//! the provider payloads is ignored by serde.

use serde::Deserialize;

/// Geocoding API response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Forecast API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    #[serde(default)]
    pub data: Vec<DailyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyEntry {
    /// Unix seconds at the start of the day
    pub time: i64,
    #[serde(default)]
    pub summary: String,
}

/// Business search response.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessSearchResponse {
    #[serde(default)]
    pub businesses: Vec<BusinessEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessEntry {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub url: String,
}

/// Movie search response.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSearchResponse {
    #[serde(default)]
    pub results: Vec<FilmEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilmEntry {
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn geocode_ignores_unknown_fields() {
        let body = json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Seattle, WA, USA",
                "place_id": "abc",
                "geometry": { "location": { "lat": 47.6, "lng": -122.3 }, "location_type": "APPROXIMATE" }
            }]
        });
        let parsed: GeocodeResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].geometry.location.lng, -122.3);
    }

    #[test]
    fn film_with_null_poster_and_missing_date() {
        let body = json!({
            "results": [{
                "title": "Sleepless in Seattle",
                "overview": "",
                "vote_average": 6.8,
                "vote_count": 1500,
                "poster_path": null,
                "popularity": 12.5
            }]
        });
        let parsed: MovieSearchResponse = serde_json::from_value(body).unwrap();
        let film = &parsed.results[0];
        assert!(film.poster_path.is_none());
        assert!(film.release_date.is_none());
    }

    #[test]
    fn business_without_price() {
        let body = json!({
            "businesses": [{
                "name": "Pike Place Chowder",
                "image_url": "https://img.example/1.jpg",
                "rating": 4.5,
                "url": "https://yelp.example/biz/1"
            }],
            "total": 1
        });
        let parsed: BusinessSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.businesses[0].price, None);
    }
}

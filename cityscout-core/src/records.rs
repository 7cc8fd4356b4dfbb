//! Stored record shapes
//!
//! One flat struct per persisted entity. Field names double as the JSON
//! keys served to clients, so renaming a field is a wire change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved place. `search_query` is the lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A place that has been geocoded but not yet stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlace {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewPlace {
    /// Attach the identifier generated by the store.
    pub fn with_id(self, id: i64) -> Place {
        Place {
            id,
            search_query: self.search_query,
            formatted_query: self.formatted_query,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub forecast: String,
    /// Display date, e.g. `Wed Jan 01 2020`
    pub time: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    pub image_url: String,
    /// Price tier such as `$$`; not every listing has one
    pub price: Option<String>,
    pub rating: f64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub overview: String,
    pub average_votes: f64,
    pub total_votes: i64,
    pub image_url: Option<String>,
    pub popularity: f64,
    pub released_on: Option<String>,
}

/// Place reference carried by the weather and restaurant routes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceRef {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Place reference carried by the movie route.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceAddress {
    pub id: i64,
    pub formatted_query: String,
}

//! Query-string extractors for the route inputs
//!
//! Place references arrive in bracket form, e.g.
//! `?data[id]=3&data[latitude]=47.6&data[longitude]=-122.3`.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use cityscout_core::{PlaceAddress, PlaceRef};
use serde::Deserialize;

use super::error::ApiError;

#[derive(Deserialize)]
struct LocationParams {
    data: String,
}

#[derive(Deserialize)]
struct PlaceRefParams {
    #[serde(rename = "data[id]")]
    id: i64,
    #[serde(rename = "data[latitude]")]
    latitude: f64,
    #[serde(rename = "data[longitude]")]
    longitude: f64,
}

#[derive(Deserialize)]
struct PlaceAddressParams {
    #[serde(rename = "data[id]")]
    id: i64,
    #[serde(rename = "data[formatted_query]")]
    formatted_query: String,
}

async fn query<T, S>(parts: &mut Parts, state: &S) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    let Query(params) = Query::<T>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| ApiError::BadRequest {
            message: rejection.body_text(),
        })?;
    Ok(params)
}

/// Free-text place query from `?data=`
pub struct LocationQuery(pub String);

impl<S> FromRequestParts<S> for LocationQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params: LocationParams = query(parts, state).await?;
        Ok(Self(params.data))
    }
}

/// Place id and coordinates
pub struct PlaceRefQuery(pub PlaceRef);

impl<S> FromRequestParts<S> for PlaceRefQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params: PlaceRefParams = query(parts, state).await?;
        Ok(Self(PlaceRef {
            id: params.id,
            latitude: params.latitude,
            longitude: params.longitude,
        }))
    }
}

/// Place id and formatted address
pub struct PlaceAddressQuery(pub PlaceAddress);

impl<S> FromRequestParts<S> for PlaceAddressQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params: PlaceAddressParams = query(parts, state).await?;
        Ok(Self(PlaceAddress {
            id: params.id,
            formatted_query: params.formatted_query,
        }))
    }
}

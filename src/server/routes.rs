//! Route handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::cache::MediaProxy;
use crate::client::GraphQlApi;
use crate::client::models::{Media, MediaListCollection, SearchPage};
use crate::error::Error;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// Shared handler state
pub type AppState<C> = Arc<MediaProxy<C>>;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub media_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /media/{id}`
pub async fn read_media<C: GraphQlApi + 'static>(
    State(proxy): State<AppState<C>>,
    Path(id): Path<String>,
) -> ApiResult<Media> {
    let id: i64 = id
        .parse()
        .map_err(|_| Error::InvalidRequest(format!("media id must be an integer, got '{}'", id)))?;
    Ok(Json(proxy.media(id).await?))
}

/// `GET /media/user/{username}`
pub async fn read_user<C: GraphQlApi + 'static>(
    State(proxy): State<AppState<C>>,
    Path(user_name): Path<String>,
) -> ApiResult<MediaListCollection> {
    Ok(Json(proxy.user_lists(&user_name).await?))
}

/// `GET /media/search/{query}?media_type=ANIME|MANGA`
pub async fn search_media<C: GraphQlApi + 'static>(
    State(proxy): State<AppState<C>>,
    Path(query): Path<String>,
    Query(params): Query<SearchParams>,
) -> ApiResult<SearchPage> {
    let media_type = params
        .media_type
        .ok_or_else(|| Error::InvalidRequest("media_type is required".to_string()))?;
    Ok(Json(proxy.search(&query, &media_type).await?))
}

//! Map document handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Response,
};
use serde::Deserialize;

use atlas_common::{AtlasError, Session};
use atlas_datasets::{load_sites, MapFeatureCollection};

use crate::state::AppState;

use super::{error_response, json_response};

#[derive(Debug, Deserialize, Default)]
pub struct MapParams {
    /// Session year; defaults to the configured one.
    pub annee: Option<u16>,
}

/// GET /api/map/features?annee= - GeoJSON FeatureCollection of program
/// sites for the front-end map.
///
/// The configured year is served from memory; other years re-read the
/// cartography file.
pub async fn map_features_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MapParams>,
) -> Response {
    let year = params.annee.map(Session).unwrap_or(state.config.year);

    if year == state.config.year {
        return json_response(&MapFeatureCollection::from_sites(&state.sites));
    }

    let path = state.config.carto_path.clone();
    let loaded = tokio::task::spawn_blocking(move || load_sites(&path, year)).await;

    let sites = match loaded {
        Ok(Ok(sites)) => sites,
        Ok(Err(e)) => return error_response(&e.into()),
        Err(e) => return error_response(&AtlasError::InternalError(e.to_string())),
    };

    if sites.is_empty() {
        return error_response(&AtlasError::YearNotAvailable(year.to_string()));
    }

    json_response(&MapFeatureCollection::from_sites(&sites))
}

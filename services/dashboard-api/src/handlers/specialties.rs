//! Specialty-pairs handlers: formation list, heatmap and comparison bars.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};

use atlas_common::{AtlasError, Session};
use atlas_figures::{comparison_bar, specialty_heatmap};
use atlas_match::categorize;

use crate::state::AppState;

use super::{error_response, json_response};

#[derive(Serialize)]
pub struct FormationsResponse {
    pub formations: Vec<String>,
    pub years: Vec<Session>,
}

/// GET /api/specialties/formations - dropdown data
pub async fn formations_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<FormationsResponse> {
    Json(FormationsResponse {
        formations: state.specialties.formations().labels().to_vec(),
        years: state.specialties.years(),
    })
}

#[derive(Debug, Deserialize)]
pub struct SpecialtyParams {
    /// Formation label; may be the loose wording from the map dataset.
    pub formation: String,
    /// Bac year; defaults to the configured session year.
    pub annee: Option<u16>,
    /// Alternate wording of the program label, when the caller has one.
    #[serde(default)]
    pub alt: String,
}

/// Resolve a possibly loose formation label against the specialty table.
///
/// Exact labels pass through; anything else goes through the fuzzy
/// categorization. An empty categorization is "formation not found".
fn resolve_formation(state: &AppState, params: &SpecialtyParams) -> Result<String, AtlasError> {
    if params.formation.is_empty() {
        return Err(AtlasError::MissingParameter("formation".into()));
    }

    let formations = state.specialties.formations();
    if formations.contains(&params.formation) {
        return Ok(params.formation.clone());
    }

    let resolved = categorize(&params.formation, &params.alt, formations.labels());
    if resolved.is_empty() {
        return Err(AtlasError::FormationNotFound(params.formation.clone()));
    }
    Ok(resolved)
}

/// GET /api/specialties/heatmap?formation=&annee=&alt=
///
/// Heatmap of admission proposals per specialty pair for the resolved
/// formation.
pub async fn heatmap_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<SpecialtyParams>,
) -> Response {
    let year = params.annee.map(Session).unwrap_or(state.config.year);

    let formation = match resolve_formation(&state, &params) {
        Ok(f) => f,
        Err(e) => return error_response(&e),
    };

    match state.specialties.pivot(&formation, year) {
        Some(pivot) => json_response(&specialty_heatmap(&pivot)),
        None => error_response(&AtlasError::YearNotAvailable(format!(
            "{} - {}",
            formation, year
        ))),
    }
}

/// GET /api/specialties/comparison?formation=&annee=
///
/// Grouped bars of wishes vs admission proposals per specialty pair.
pub async fn comparison_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<SpecialtyParams>,
) -> Response {
    let year = params.annee.map(Session).unwrap_or(state.config.year);

    let formation = match resolve_formation(&state, &params) {
        Ok(f) => f,
        Err(e) => return error_response(&e),
    };

    let rows = state.specialties.comparison(&formation, year);
    json_response(&comparison_bar(&rows, year))
}

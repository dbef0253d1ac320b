//! Institution drill-down handlers.
//!
//! All endpoints fetch the admission records of one institution from the
//! upstream API, then either return them as-is or derive figures for one
//! program.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::Response,
};
use serde::Deserialize;

use atlas_common::{AtlasError, ProgramAdmission, Session, Uai};
use atlas_figures::{admissions_sunburst, gender_figures, mentions_pie};

use crate::state::AppState;

use super::{error_response, json_response};

#[derive(Debug, Deserialize, Default)]
pub struct InstitutionParams {
    /// Session year; defaults to the configured one.
    pub session: Option<u16>,
}

/// GET /api/institutions/:uai?session=
pub async fn institution_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(uai): Path<String>,
    Query(params): Query<InstitutionParams>,
) -> Response {
    let session = params.session.map(Session).unwrap_or(state.config.year);
    let uai = Uai::new(uai);

    match state.parcoursup.fetch_institution(&uai, session).await {
        Ok(records) => json_response(&records),
        Err(e) => error_response(&e),
    }
}

/// Fetch one program of an institution, by its index in the session's
/// record list.
async fn fetch_program(
    state: &AppState,
    uai: &Uai,
    session: Session,
    index: usize,
) -> Result<ProgramAdmission, AtlasError> {
    let records = state.parcoursup.fetch_institution(uai, session).await?;
    records.programs.into_iter().nth(index).ok_or_else(|| {
        AtlasError::ProgramNotFound(format!("{}#{}", uai, index))
    })
}

/// GET /api/institutions/:uai/programs/:index/figures/mentions
pub async fn mentions_figure_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((uai, index)): Path<(String, usize)>,
    Query(params): Query<InstitutionParams>,
) -> Response {
    let session = params.session.map(Session).unwrap_or(state.config.year);
    match fetch_program(&state, &Uai::new(uai), session, index).await {
        Ok(program) => json_response(&mentions_pie(&program)),
        Err(e) => error_response(&e),
    }
}

/// GET /api/institutions/:uai/programs/:index/figures/admissions
pub async fn admissions_figure_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((uai, index)): Path<(String, usize)>,
    Query(params): Query<InstitutionParams>,
) -> Response {
    let session = params.session.map(Session).unwrap_or(state.config.year);
    match fetch_program(&state, &Uai::new(uai), session, index).await {
        Ok(program) => json_response(&admissions_sunburst(&program)),
        Err(e) => error_response(&e),
    }
}

/// GET /api/institutions/:uai/programs/:index/figures/gender
///
/// Returns both gender figures in one document: the candidatures/admissions
/// sunburst and the grouped bar chart.
pub async fn gender_figure_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((uai, index)): Path<(String, usize)>,
    Query(params): Query<InstitutionParams>,
) -> Response {
    let session = params.session.map(Session).unwrap_or(state.config.year);
    match fetch_program(&state, &Uai::new(uai), session, index).await {
        Ok(program) => json_response(&gender_figures(&program)),
        Err(e) => error_response(&e),
    }
}

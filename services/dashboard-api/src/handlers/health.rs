//! Health handlers.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub sites: usize,
    pub specialty_records: usize,
    pub formations: usize,
}

/// GET /health - Basic liveness check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Reports the sizes of the loaded datasets
pub async fn ready_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        ready: !state.sites.is_empty(),
        sites: state.sites.len(),
        specialty_records: state.specialties.records().len(),
        formations: state.specialties.formations().labels().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "ok");
    }
}

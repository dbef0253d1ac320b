//! Error types for parcoursup-atlas services.

use thiserror::Error;

/// Result type alias using AtlasError.
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Primary error type for dashboard operations.
#[derive(Debug, Error)]
pub enum AtlasError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Institution not found: {0}")]
    InstitutionNotFound(String),

    #[error("Program not found: {0}")]
    ProgramNotFound(String),

    #[error("Formation not found: {0}")]
    FormationNotFound(String),

    // === Dataset Errors ===
    #[error("Failed to read dataset: {0}")]
    DatasetRead(String),

    #[error("Failed to parse dataset: {0}")]
    DatasetParse(String),

    #[error("Data not available for year: {0}")]
    YearNotAvailable(String),

    // === Upstream Errors ===
    #[error("Upstream API request failed: {0}")]
    UpstreamRequest(String),

    #[error("Upstream API returned unexpected payload: {0}")]
    UpstreamPayload(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AtlasError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AtlasError::MissingParameter(_)
            | AtlasError::InvalidParameter { .. } => 400,

            AtlasError::InstitutionNotFound(_)
            | AtlasError::ProgramNotFound(_)
            | AtlasError::FormationNotFound(_)
            | AtlasError::YearNotAvailable(_) => 404,

            AtlasError::UpstreamRequest(_) => 502,

            _ => 500,
        }
    }

    /// Short machine-readable code used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AtlasError::MissingParameter(_) => "missing_parameter",
            AtlasError::InvalidParameter { .. } => "invalid_parameter",
            AtlasError::InstitutionNotFound(_) => "institution_not_found",
            AtlasError::ProgramNotFound(_) => "program_not_found",
            AtlasError::FormationNotFound(_) => "formation_not_found",
            AtlasError::DatasetRead(_) => "dataset_read",
            AtlasError::DatasetParse(_) => "dataset_parse",
            AtlasError::YearNotAvailable(_) => "year_not_available",
            AtlasError::UpstreamRequest(_) => "upstream_request",
            AtlasError::UpstreamPayload(_) => "upstream_payload",
            AtlasError::InternalError(_) => "internal_error",
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for AtlasError {
    fn from(err: std::io::Error) -> Self {
        AtlasError::DatasetRead(err.to_string())
    }
}

impl From<serde_json::Error> for AtlasError {
    fn from(err: serde_json::Error) -> Self {
        AtlasError::DatasetParse(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_to_4xx() {
        assert_eq!(
            AtlasError::MissingParameter("annee".into()).http_status_code(),
            400
        );
        assert_eq!(
            AtlasError::InstitutionNotFound("0751234X".into()).http_status_code(),
            404
        );
    }

    #[test]
    fn upstream_failures_map_to_502() {
        assert_eq!(
            AtlasError::UpstreamRequest("timeout".into()).http_status_code(),
            502
        );
    }

    #[test]
    fn io_errors_become_dataset_read() {
        let err: AtlasError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.code(), "dataset_read");
        assert_eq!(err.http_status_code(), 500);
    }
}

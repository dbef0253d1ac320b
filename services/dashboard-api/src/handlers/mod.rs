//! HTTP handlers for the dashboard API.

pub mod health;
pub mod home;
pub mod institutions;
pub mod map;
pub mod specialties;

use axum::{
    http::{header, StatusCode},
    response::Response,
};
use serde::Serialize;

use atlas_common::AtlasError;

/// JSON error body: `{"code": ..., "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Map an AtlasError to its JSON error response.
pub fn error_response(err: &AtlasError) -> Response {
    let body = ErrorBody {
        code: err.code(),
        message: err.to_string(),
    };
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let json = serde_json::to_string(&body).unwrap_or_default();

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}

/// Build a 200 JSON response from a serializable document.
pub fn json_response<T: Serialize>(document: &T) -> Response {
    match serde_json::to_string(document) {
        Ok(json) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(json.into())
            .unwrap(),
        Err(e) => error_response(&AtlasError::InternalError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_carries_status_and_code() {
        let response =
            error_response(&AtlasError::InstitutionNotFound("0751234X".into()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_body_serializes_code_and_message() {
        let body = ErrorBody {
            code: "institution_not_found",
            message: "Institution not found: 0751234X".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "institution_not_found");
        assert!(json["message"].as_str().unwrap().contains("0751234X"));
    }
}

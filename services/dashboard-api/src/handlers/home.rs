//! Landing page: the dashboard shell.
//!
//! A single embedded HTML page; the map and the figures are fetched from
//! the JSON endpoints and rendered client-side by Leaflet and Plotly.

use axum::http::header;
use axum::response::Response;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / - dashboard page
pub async fn home_handler() -> Response {
    Response::builder()
        .status(200)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(INDEX_HTML.into())
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_references_the_api_endpoints() {
        assert!(INDEX_HTML.contains("/api/map/features"));
        assert!(INDEX_HTML.contains("/api/specialties/heatmap"));
    }
}

//! Runtime configuration for the dashboard service.

use std::path::PathBuf;

use atlas_common::Session;

/// Default base URL of the open-data explore API.
pub const DEFAULT_API_BASE_URL: &str =
    "https://data.enseignementsup-recherche.gouv.fr/api/explore/v2.1";

/// Export URL of the cartography dataset.
pub const CARTO_EXPORT_URL: &str = "https://data.enseignementsup-recherche.gouv.fr/api/explore/v2.1/catalog/datasets/fr-esr-cartographie_formations_parcoursup/exports/geojson";

/// Export URL of the specialty-pairs dataset.
pub const SPECIALTIES_EXPORT_URL: &str = "https://data.enseignementsup-recherche.gouv.fr/api/explore/v2.1/catalog/datasets/fr-esr-parcoursup-enseignements-de-specialite-bacheliers-generaux-2/exports/json";

/// Resolved service configuration, built from CLI args and environment.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Local path of the cartography GeoJSON file.
    pub carto_path: PathBuf,
    /// Local path of the specialty-pairs JSON file.
    pub specialties_path: PathBuf,
    /// Session year the map is pre-filtered on.
    pub year: Session,
    /// Base URL of the upstream admission-records API.
    pub api_base_url: String,
    /// Re-download the dataset files before loading them.
    pub refresh_on_start: bool,
}

impl DashboardConfig {
    /// Directory both dataset files live in; used as the refresh target.
    pub fn data_dir(&self) -> PathBuf {
        self.carto_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

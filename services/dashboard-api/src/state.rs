//! Application state for the dashboard service.

use anyhow::{Context, Result};
use tracing::info;

use atlas_datasets::{load_sites, refresh_dataset, ProgramSite, SpecialtyTable};

use crate::config::{DashboardConfig, CARTO_EXPORT_URL, SPECIALTIES_EXPORT_URL};
use crate::parcoursup::ParcoursupClient;

/// Shared application state: both datasets loaded at startup plus the
/// upstream client.
pub struct AppState {
    pub config: DashboardConfig,
    /// Program sites of the configured session year.
    pub sites: Vec<ProgramSite>,
    pub specialties: SpecialtyTable,
    pub parcoursup: ParcoursupClient,
}

impl AppState {
    /// Build the state: refresh the dataset files when asked, then load
    /// both into memory.
    pub async fn new(config: DashboardConfig) -> Result<Self> {
        if config.refresh_on_start {
            let client = reqwest::Client::new();
            let data_dir = config.data_dir();
            for url in [CARTO_EXPORT_URL, SPECIALTIES_EXPORT_URL] {
                let outcome = refresh_dataset(&client, url, &data_dir)
                    .await
                    .with_context(|| format!("refreshing {}", url))?;
                info!(
                    path = %outcome.path.display(),
                    updated = outcome.updated,
                    "Dataset refresh"
                );
            }
        }

        let sites = load_sites(&config.carto_path, config.year)
            .with_context(|| format!("loading {}", config.carto_path.display()))?;
        let specialties = SpecialtyTable::load(&config.specialties_path)
            .with_context(|| format!("loading {}", config.specialties_path.display()))?;

        let parcoursup = ParcoursupClient::new(config.api_base_url.clone())?;

        Ok(Self {
            config,
            sites,
            specialties,
            parcoursup,
        })
    }
}

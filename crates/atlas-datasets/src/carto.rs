//! Cartography dataset: one GeoJSON Point feature per program site.
//!
//! Source file: `fr-esr-cartographie_formations_parcoursup.geojson`.
//! Features carry the institution name and UAI code, the program label and
//! the session year; the geometry is a `[lon, lat]` point.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use atlas_common::{Session, Uai};

use crate::error::Result;

/// One program site extracted from the cartography dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramSite {
    pub etab_nom: String,
    pub etab_uai: Uai,
    pub annee: Session,
    pub nom_formation: String,
    pub latitude: f64,
    pub longitude: f64,
}

// === Input document ===

#[derive(Debug, Deserialize)]
struct CartoDocument {
    #[serde(default)]
    features: Vec<CartoFeature>,
}

#[derive(Debug, Deserialize)]
struct CartoFeature {
    #[serde(default)]
    properties: CartoProperties,
    #[serde(default)]
    geometry: Option<CartoGeometry>,
}

/// Properties of a cartography feature; absent fields default to empty.
#[derive(Debug, Default, Deserialize)]
struct CartoProperties {
    #[serde(default)]
    etab_nom: String,
    #[serde(default)]
    etab_uai: String,
    #[serde(default)]
    annee: String,
    /// Program label ("nm" in the source schema).
    #[serde(default)]
    nm: String,
}

#[derive(Debug, Deserialize)]
struct CartoGeometry {
    #[serde(rename = "type", default)]
    type_: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

impl CartoGeometry {
    /// Extract `(lon, lat)` when this is a Point geometry.
    fn point(&self) -> Option<(f64, f64)> {
        if self.type_ != "Point" {
            return None;
        }
        let coords = self.coordinates.as_array()?;
        let lon = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        Some((lon, lat))
    }
}

/// Parse the cartography document and keep the sites of the target year.
///
/// Features without a point geometry or with a different year are skipped.
pub fn parse_sites(geojson: &str, year: Session) -> Result<Vec<ProgramSite>> {
    let document: CartoDocument = serde_json::from_str(geojson)?;
    let target = year.to_string();

    let mut sites = Vec::new();
    for feature in &document.features {
        if feature.properties.annee != target {
            continue;
        }
        let Some((longitude, latitude)) = feature.geometry.as_ref().and_then(|g| g.point())
        else {
            debug!(
                etab = %feature.properties.etab_nom,
                "Skipping feature without point geometry"
            );
            continue;
        };
        sites.push(ProgramSite {
            etab_nom: feature.properties.etab_nom.clone(),
            etab_uai: Uai::new(feature.properties.etab_uai.clone()),
            annee: year,
            nom_formation: feature.properties.nm.clone(),
            latitude,
            longitude,
        });
    }

    Ok(sites)
}

/// Load the cartography file from disk and filter it by year.
pub fn load_sites(path: &Path, year: Session) -> Result<Vec<ProgramSite>> {
    let content = std::fs::read_to_string(path)?;
    let sites = parse_sites(&content, year)?;
    info!(
        count = sites.len(),
        year = %year,
        path = %path.display(),
        "Loaded program sites"
    );
    Ok(sites)
}

// === Output document for the front-end map ===

/// GeoJSON FeatureCollection of program sites, served to the map widget.
#[derive(Debug, Clone, Serialize)]
pub struct MapFeatureCollection {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub features: Vec<MapFeature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapFeature {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub geometry: MapGeometry,
    pub properties: MapProperties,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapGeometry {
    #[serde(rename = "type")]
    pub type_: &'static str,
    /// Coordinates as [longitude, latitude].
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct MapProperties {
    pub etab_nom: String,
    pub etab_uai: Uai,
    pub annee: Session,
    pub nom_formation: String,
}

impl MapFeatureCollection {
    /// Build the map document from loaded sites.
    pub fn from_sites(sites: &[ProgramSite]) -> Self {
        let features = sites
            .iter()
            .map(|site| MapFeature {
                type_: "Feature",
                geometry: MapGeometry {
                    type_: "Point",
                    coordinates: [site.longitude, site.latitude],
                },
                properties: MapProperties {
                    etab_nom: site.etab_nom.clone(),
                    etab_uai: site.etab_uai.clone(),
                    annee: site.annee,
                    nom_formation: site.nom_formation.clone(),
                },
            })
            .collect();
        Self {
            type_: "FeatureCollection",
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures::CARTO_SAMPLE;

    #[test]
    fn parses_and_filters_by_year() {
        let sites = parse_sites(CARTO_SAMPLE, Session(2023)).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].etab_nom, "Université Claude Bernard Lyon 1");
        assert_eq!(sites[0].etab_uai.as_str(), "0691774D");
        assert_eq!(sites[0].nom_formation, "BUT Informatique");
        assert!((sites[0].longitude - 4.8655).abs() < 1e-9);
        assert!((sites[0].latitude - 45.7797).abs() < 1e-9);
    }

    #[test]
    fn other_years_are_excluded() {
        let sites = parse_sites(CARTO_SAMPLE, Session(2022)).unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].nom_formation, "DCG");
    }

    #[test]
    fn missing_properties_default_to_empty() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"annee": "2023"},
                "geometry": {"type": "Point", "coordinates": [2.0, 47.0]}
            }]
        }"#;
        let sites = parse_sites(json, Session(2023)).unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].etab_nom, "");
        assert_eq!(sites[0].etab_uai.as_str(), "");
        assert_eq!(sites[0].nom_formation, "");
    }

    #[test]
    fn non_point_geometry_is_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"annee": "2023", "etab_nom": "X"},
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
            }]
        }"#;
        let sites = parse_sites(json, Session(2023)).unwrap();
        assert!(sites.is_empty());
    }

    #[test]
    fn map_document_round_trips_coordinates() {
        let sites = parse_sites(CARTO_SAMPLE, Session(2023)).unwrap();
        let fc = MapFeatureCollection::from_sites(&sites);
        assert_eq!(fc.type_, "FeatureCollection");
        assert_eq!(fc.features.len(), sites.len());

        let json = serde_json::to_value(&fc).unwrap();
        assert_eq!(json["features"][0]["geometry"]["type"], "Point");
        assert_eq!(
            json["features"][0]["properties"]["etab_uai"],
            "0691774D"
        );
    }
}

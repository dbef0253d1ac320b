//! Dataset refresh: re-download a published file when it changed.
//!
//! The open-data portal republishes the source files in place, so the only
//! way to know whether anything changed is to fetch and compare. The new
//! payload lands in a temp file first and only replaces the existing one
//! when the checksum differs.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::{DatasetError, Result};

/// Result of a refresh attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    /// Final location of the dataset file.
    pub path: PathBuf,
    /// Whether the local copy was created or replaced.
    pub updated: bool,
}

/// Derive the local filename for a dataset URL.
///
/// Prefers the Content-Disposition filename when the server sent one;
/// otherwise builds `<dataset-slug>.<format>` from the URL path, keeping
/// the `fr-esr-*` slug the portal uses.
pub fn filename_for(url: &str, content_disposition: Option<&str>) -> String {
    if let Some(cd) = content_disposition {
        if let Some(name) = cd.split("filename=").nth(1) {
            let name = name.trim().trim_matches('"');
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }

    let path = url.split('?').next().unwrap_or(url);
    let slug = path
        .split('/')
        .find(|part| part.contains("fr-esr"))
        .unwrap_or("dataset");
    let format = if url.contains("geojson") {
        "geojson"
    } else {
        "json"
    };
    format!("{}.{}", slug, format)
}

fn checksum(bytes: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// Write `bytes` to `target` only when the content differs from what is
/// already there. Returns whether the file was created or replaced.
pub fn write_if_changed(bytes: &[u8], target: &Path) -> std::io::Result<bool> {
    if target.exists() {
        let existing = std::fs::read(target)?;
        if checksum(&existing) == checksum(bytes) {
            debug!(path = %target.display(), "Dataset unchanged");
            return Ok(false);
        }
    }

    let tmp = target.with_extension("partial");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, target)?;
    Ok(true)
}

/// Download a dataset and store it under `target_dir` if new or changed.
///
/// Failed HTTP calls surface immediately; there is no retry.
#[instrument(skip(client), fields(url = %url))]
pub async fn refresh_dataset(
    client: &reqwest::Client,
    url: &str,
    target_dir: &Path,
) -> Result<RefreshOutcome> {
    tokio::fs::create_dir_all(target_dir).await?;

    let response = client.get(url).send().await?.error_for_status()?;

    let content_disposition = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let filename = filename_for(url, content_disposition.as_deref());
    let target = target_dir.join(&filename);

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(DatasetError::Invalid(format!(
            "empty payload from {}",
            url
        )));
    }

    let updated = write_if_changed(&bytes, &target)?;
    if updated {
        info!(path = %target.display(), bytes = bytes.len(), "Dataset updated");
    }

    Ok(RefreshOutcome {
        path: target,
        updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_from_content_disposition() {
        let name = filename_for(
            "https://example.org/api/records",
            Some("attachment; filename=\"export.geojson\""),
        );
        assert_eq!(name, "export.geojson");
    }

    #[test]
    fn filename_from_url_slug() {
        let url = "https://data.enseignementsup-recherche.gouv.fr/api/explore/v2.1/catalog/datasets/fr-esr-cartographie_formations_parcoursup/exports/geojson?lang=fr";
        assert_eq!(
            filename_for(url, None),
            "fr-esr-cartographie_formations_parcoursup.geojson"
        );
    }

    #[test]
    fn filename_falls_back_to_dataset_json() {
        assert_eq!(filename_for("https://example.org/export", None), "dataset.json");
    }

    #[test]
    fn write_if_changed_creates_then_skips_then_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fr-esr-test.json");

        assert!(write_if_changed(b"[1,2,3]", &target).unwrap());
        assert_eq!(std::fs::read(&target).unwrap(), b"[1,2,3]");

        // Same content: untouched.
        assert!(!write_if_changed(b"[1,2,3]", &target).unwrap());

        // Different content: replaced.
        assert!(write_if_changed(b"[4,5,6]", &target).unwrap());
        assert_eq!(std::fs::read(&target).unwrap(), b"[4,5,6]");
    }

    #[test]
    fn write_if_changed_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fr-esr-test.json");
        write_if_changed(b"{}", &target).unwrap();
        assert!(!target.with_extension("partial").exists());
    }
}

//! Loading and indexing of the two Parcoursup source datasets.
//!
//! - the cartography GeoJSON file (one Point feature per program site),
//! - the specialty-pairs admission table (one record per formation,
//!   bac year and specialty pair).
//!
//! Both are read from local disk at startup; [`refresh`] re-downloads a
//! file when the published version changed.

pub mod carto;
pub mod error;
pub mod refresh;
pub mod specialties;

pub use carto::{load_sites, parse_sites, MapFeatureCollection, ProgramSite};
pub use error::{DatasetError, Result};
pub use refresh::{refresh_dataset, RefreshOutcome};
pub use specialties::{ComparisonRow, FormationIndex, SpecialtyPivot, SpecialtyTable};

//! Common types and utilities shared across the parcoursup-atlas workspace.

pub mod error;
pub mod records;
pub mod types;

pub use error::{AtlasError, AtlasResult};
pub use records::{InstitutionSummary, ProgramAdmission};
pub use types::{Session, Uai};

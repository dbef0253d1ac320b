//! Fuzzy categorization of Parcoursup program labels.
//!
//! The cartography dataset and the specialty-pairs dataset were produced
//! independently and do not agree on program naming ("BUT Informatique -
//! site de Lyon" vs "Informatique", "D.E Infirmier" vs "Infirmier", ...).
//! This crate reconciles the two: substring markers route a raw label to a
//! restricted candidate list, and a string-similarity score picks the best
//! candidate within it.

pub mod categorize;
pub mod fuzzy;
pub mod tables;

pub use categorize::categorize;
pub use fuzzy::{extract_one, score, Match};

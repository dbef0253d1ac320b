//! Chart figure documents for the dashboard.
//!
//! Figures are typed documents serialized to the Plotly JSON shape
//! (`{"data": [...], "layout": {...}}`) and rendered client-side; nothing
//! is rasterized here. Each builder takes pre-fetched records and is a
//! pure function of them.

pub mod admissions;
pub mod comparison;
pub mod figure;
pub mod gender;
pub mod heatmap;
pub mod mentions;

pub use admissions::admissions_sunburst;
pub use comparison::comparison_bar;
pub use figure::{Figure, Layout, Trace};
pub use gender::{gender_figures, GenderFigures};
pub use heatmap::specialty_heatmap;
pub use mentions::mentions_pie;

//! Parcoursup admission dashboard HTTP service.
//!
//! Serves the map document, institution drill-downs fetched from the
//! public admission API, and the chart figures derived from both.

pub mod config;
pub mod handlers;
pub mod parcoursup;
pub mod state;

//! netmetrics-chart - Degree Distribution & Network Metrics Chart Generator
//!
//! Renders a two-panel figure (degree distribution line plot + network
//! metrics table) from CSV input into a single PNG image.

pub mod charts;
pub mod data;

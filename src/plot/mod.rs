//! Line chart generation.
//!
//! Converts per-sample histograms into a line plot and renders it as SVG.

pub mod linegraph;

// Re-export main types
pub use linegraph::{plot, smooth_points, LineGraphConfig, LinePlot, Series};

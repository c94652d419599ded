//! Chart description for the net worth trend view.
//!
//! The renderer turns a filtered (optionally moving-average enriched) window
//! into a host-agnostic description: axes, named series, milestone markers
//! and pre-formatted tooltips. Per-view-mode series construction lives behind
//! [`SeriesStrategy`]; everything else is shared.

mod chart_model;
mod chart_renderer;
mod series_strategy;

pub use chart_model::*;
pub use chart_renderer::*;
pub use series_strategy::*;

#[cfg(test)]
mod chart_renderer_tests;

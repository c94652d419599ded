//! Net worth dashboard pipeline.
//!
//! Composes the pure stages as
//! `render(filter(source, timeframe), view_mode, toggles)` and wraps the
//! snapshot feed's load state around them.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::*;
pub use dashboard_service::*;
pub use dashboard_traits::*;

//! Summary statistics and derived series over a filtered snapshot window.

mod metrics_calculator;
mod metrics_model;
mod moving_average;

pub use metrics_calculator::*;
pub use metrics_model::*;
pub use moving_average::*;

//! Timeframe selection and window filtering.

mod timeframe_filter;
mod timeframe_model;

pub use timeframe_filter::*;
pub use timeframe_model::*;

//! Milestones annotated on the net worth chart.

mod milestones_model;

pub use milestones_model::*;

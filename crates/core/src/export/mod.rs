//! CSV export of a filtered net worth window.

mod csv_exporter;

pub use csv_exporter::*;

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::EXPORT_EMPTY_NOTICE;
use crate::errors::{Error, Result};
use crate::metrics::debt_to_asset_ratio;
use crate::snapshots::{AssetClass, Snapshot};
use crate::timeframe::Timeframe;
use crate::utils::format_utils::{format_percent, round_display};

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 11] = [
    "Date",
    "Total Net Worth",
    "Total Assets",
    "Total Liabilities",
    "Liquid Net Worth",
    "Cash",
    "Stocks",
    "Bonds",
    "Real Estate",
    "Other Assets",
    "Debt-to-Asset Ratio",
];

/// A rendered export ready for the host's download mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    /// Data rows, header excluded
    pub row_count: usize,
}

/// Suggested download name, e.g. `net-worth-1Y-2024-06-30.csv`.
pub fn export_filename(timeframe: Timeframe, today: NaiveDate) -> String {
    format!("net-worth-{}-{}.csv", timeframe.label(), today.format("%Y-%m-%d"))
}

/// Serializes a filtered window to CSV.
///
/// Every row has all eleven columns: money rounded to 2 dp, missing optional
/// amounts written as `0.00`, the ratio as a percentage. An empty window is
/// refused with a user-facing notice instead of producing a header-only file.
pub fn export_csv(
    snapshots: &[Snapshot],
    timeframe: Timeframe,
    today: NaiveDate,
) -> Result<CsvExport> {
    if snapshots.is_empty() {
        warn!("Refusing {} export: no snapshots in window", timeframe);
        return Err(Error::ExportRefused(EXPORT_EMPTY_NOTICE.to_string()));
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for snapshot in snapshots {
        writer.write_record(csv_row(snapshot))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    let content = String::from_utf8(bytes)?;

    debug!(
        "Exported {} snapshots for timeframe {}",
        snapshots.len(),
        timeframe
    );

    Ok(CsvExport {
        filename: export_filename(timeframe, today),
        content,
        row_count: snapshots.len(),
    })
}

fn csv_row(snapshot: &Snapshot) -> Vec<String> {
    let mut row = Vec::with_capacity(CSV_HEADERS.len());
    row.push(snapshot.date.format("%Y-%m-%d").to_string());
    row.push(money(snapshot.total_net_worth));
    row.push(money(snapshot.total_assets));
    row.push(money(snapshot.total_liabilities));
    row.push(money(snapshot.liquid_or_zero()));
    for class in AssetClass::ALL {
        row.push(money(snapshot.class_amount(class)));
    }
    let ratio_percent = debt_to_asset_ratio(snapshot)
        .saturating_mul(Decimal::ONE_HUNDRED);
    row.push(format_percent(ratio_percent));
    row
}

fn money(value: Decimal) -> String {
    format!("{:.2}", round_display(value))
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display and export
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Trailing window used by the moving-average overlay
pub const MOVING_AVERAGE_WINDOW: usize = 7;

/// Debt-to-asset ratio below which the balance sheet is rated excellent
pub const DEBT_RATIO_EXCELLENT_THRESHOLD: Decimal = dec!(0.30);

/// Debt-to-asset ratio below which the balance sheet is rated good
pub const DEBT_RATIO_GOOD_THRESHOLD: Decimal = dec!(0.50);

/// Currency symbol used for axis labels, tooltips and metric cards
pub const CURRENCY_SYMBOL: &str = "$";

/// Notice shown when an export is requested for an empty window
pub const EXPORT_EMPTY_NOTICE: &str = "No data available to export";

/// Placeholder shown instead of a chart when the window has no snapshots
pub const CHART_EMPTY_NOTICE: &str = "No net worth data available for the selected timeframe";

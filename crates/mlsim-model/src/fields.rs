//! Canonical field names of the sales dataset.

pub const ID: &str = "id";
pub const LOCATION: &str = "location";
/// Product category name.
pub const PARENT_NAME: &str = "parent_name";
pub const COST: &str = "cost";
pub const UNITS_SOLD: &str = "units_sold";
/// Derived at the source; the regression target.
pub const GROSS_PROFIT: &str = "gross_profit";
/// 0/1 flag; the classification target.
pub const MARGIN_ABOVE_MEDIAN: &str = "margin_above_median";

/// Columns rescaled by standardization, in application order.
pub const NUMERIC_FIELDS: [&str; 2] = [COST, UNITS_SOLD];

//! Query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

/// Launch date window (`?startDate=yyyy-MM-dd&endDate=yyyy-MM-dd`).
///
/// Both bounds are inclusive. They are not checked against each other.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

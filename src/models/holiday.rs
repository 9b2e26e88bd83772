//! Holiday model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A paid holiday, already enriched with its hour value for one schedule.
///
/// The hour value of a holiday depends on the work schedule (a Thursday
/// holiday is worth 9 hours on a 9/80 schedule but 8 on 5/40), so enrichment
/// happens once — in the configuration layer — before the holiday list is
/// handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday's display name (e.g., "Thanksgiving").
    pub name: String,
    /// The calendar date the holiday falls on.
    pub date: NaiveDate,
    /// The paid hours this holiday is worth under the enriching schedule.
    pub hours: Decimal,
}

//! The trailing-year estimate: category shares over the 365 or 366 days
//! ending yesterday, computed from daily rather than monthly samples.

use crate::energy::extract::DailyEnergy;
use crate::energy::rolling::{CategoryShares, CategoryTotals};
use crate::types::fuel_tech::FuelTechCategories;
use chrono::{Datelike, NaiveDate};
use log::info;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The inclusive day range a trailing-year estimate covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TrailingWindow {
    /// The trailing calendar year ending the day before `today`.
    ///
    /// The start is one day after the end's calendar date a year earlier;
    /// when the end is Feb 29 the prior year has no such date and Feb 28 is
    /// used instead. The window spans 365 days, or 366 when it crosses a
    /// Feb 29.
    pub fn ending_yesterday(today: NaiveDate) -> Self {
        let end = today.pred_opt().unwrap_or(today);
        let one_year_back = year_back(end);
        let start = one_year_back.succ_opt().unwrap_or(one_year_back);
        Self { start, end }
    }

    /// The distinct calendar years the window touches, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start.year()..=self.end.year()
    }

    /// Number of days in the window, both endpoints included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl Display for TrailingWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Same calendar date one year earlier, clamping Feb 29 to Feb 28.
fn year_back(date: NaiveDate) -> NaiveDate {
    let year = date.year() - 1;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

/// Category shares over `window`, from merged daily generation.
///
/// Days outside the window are ignored. A window with no generation at all
/// yields zero shares rather than an error; the caller decides what an empty
/// estimate means.
pub fn trailing_year_share(
    daily: &DailyEnergy,
    window: &TrailingWindow,
    categories: &FuelTechCategories,
) -> CategoryShares {
    let mut totals = CategoryTotals::default();
    let mut days = 0;
    for (_, values) in daily.range(window.start..=window.end) {
        totals.add_period(values, categories);
        days += 1;
    }
    info!(
        "Aggregated daily data for {days} of {} days in {window}",
        window.num_days()
    );
    totals.shares().unwrap_or(CategoryShares {
        fossil: 0.0,
        renewable: 0.0,
    })
}

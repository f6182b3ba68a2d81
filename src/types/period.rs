use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month: (year, month). Ordered by calendar order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub i32, pub u32);

impl Month {
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }
    pub fn new(month: u32, year: i32) -> Self {
        Self(year, month)
    }
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.year(), date.month())
    }

    /// The month `offset` steps after this one, rolling the year forward as
    /// needed. Exact for arbitrary offsets.
    pub fn months_after(self, offset: u32) -> Self {
        let zero_based = self.1 - 1 + offset;
        Self(self.0 + (zero_based / 12) as i32, zero_based % 12 + 1)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

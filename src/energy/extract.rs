//! Turns parsed stats payloads into period-keyed generation mappings, one
//! value per (period, fuel technology).

use crate::energy::error::SeriesError;
use crate::types::fuel_tech::FuelTechCategories;
use crate::types::payload::{SeriesHistory, SeriesKind, StatsPayload};
use crate::types::period::Month;
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use log::warn;
use std::collections::BTreeMap;

/// Generation values for one period, keyed by fuel-technology code.
pub type FuelTechValues = BTreeMap<String, f64>;
/// Monthly generation, keyed by calendar month in ascending order.
pub type MonthlyEnergy = BTreeMap<Month, FuelTechValues>;
/// Daily generation, keyed by calendar date in ascending order.
pub type DailyEnergy = BTreeMap<NaiveDate, FuelTechValues>;

/// Extracts monthly generation from `payload`.
///
/// Sample `i` of a series lands in the `i`-th month after the series start,
/// rolling across year boundaries. Null samples stay absent, series that are
/// not fuel-tech energy are ignored, and excluded consumption loads are
/// dropped. Later series overwrite earlier ones on a (month, tech) collision.
///
/// # Errors
///
/// Returns [`SeriesError::InvalidStartDate`] when a qualifying series carries
/// an unparseable start date.
pub fn extract_monthly(
    payload: &StatsPayload,
    categories: &FuelTechCategories,
) -> Result<MonthlyEnergy, SeriesError> {
    let mut energy = MonthlyEnergy::new();
    for (fuel_tech, history) in qualifying_series(payload, categories) {
        let start = Month::from_date(parse_start_date(&history.start)?);
        for (i, sample) in history.data.iter().enumerate() {
            let Some(value) = sample else { continue };
            energy
                .entry(start.months_after(i as u32))
                .or_default()
                .insert(fuel_tech.to_string(), *value);
        }
    }
    Ok(energy)
}

/// Extracts daily generation from `payload`.
///
/// Sample `i` of a series lands on the `i`-th day after the series start,
/// leap years included. Series declaring a monthly interval are skipped with
/// a warning; everything else behaves as in [`extract_monthly`].
///
/// # Errors
///
/// Returns [`SeriesError::InvalidStartDate`] when a qualifying series carries
/// an unparseable start date.
pub fn extract_daily(
    payload: &StatsPayload,
    categories: &FuelTechCategories,
) -> Result<DailyEnergy, SeriesError> {
    let mut energy = DailyEnergy::new();
    for (fuel_tech, history) in qualifying_series(payload, categories) {
        if history.interval.as_deref() == Some("1M") {
            warn!("Skipping monthly '{fuel_tech}' series found in a daily payload");
            continue;
        }
        let start = parse_start_date(&history.start)?;
        for (i, sample) in history.data.iter().enumerate() {
            let Some(value) = sample else { continue };
            let Some(date) = start.checked_add_days(Days::new(i as u64)) else {
                continue;
            };
            energy
                .entry(date)
                .or_default()
                .insert(fuel_tech.to_string(), *value);
        }
    }
    Ok(energy)
}

/// Fuel-tech energy series worth extracting: classified by id, minus excluded
/// consumption loads and entries without a history block.
fn qualifying_series<'a>(
    payload: &'a StatsPayload,
    categories: &'a FuelTechCategories,
) -> impl Iterator<Item = (&'a str, &'a SeriesHistory)> {
    payload.series().iter().filter_map(move |series| {
        let SeriesKind::FuelTechEnergy { fuel_tech } = series.kind() else {
            return None;
        };
        if categories.is_excluded(fuel_tech) {
            return None;
        }
        let history = series.history.as_ref()?;
        Some((fuel_tech, history))
    })
}

/// Parses a series start as a calendar date. Accepts RFC 3339, an offset-free
/// datetime, or a bare date; the calendar fields are taken as written, the
/// UTC offset (if any) is not applied.
fn parse_start_date(start: &str) -> Result<NaiveDate, SeriesError> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(start) {
        return Ok(datetime.naive_local().date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    NaiveDate::parse_from_str(start, "%Y-%m-%d").map_err(|source| SeriesError::InvalidStartDate {
        value: start.to_string(),
        source,
    })
}

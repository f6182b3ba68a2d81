//! The analytics core: extraction of generation data from payloads and the
//! share calculations built on top of it.

pub mod error;
pub mod extract;
pub mod rolling;
pub mod trailing;

use crate::types::fuel_tech::FuelTechCategories;
use crate::types::payload::StatsPayload;
use error::SeriesError;
use rolling::{rolling_shares, RollingShare};

/// Extracts monthly generation from `payload` and computes the trailing
/// `window_size`-month fossil/renewable shares in one step.
///
/// # Errors
///
/// Returns [`SeriesError::InvalidStartDate`] when a qualifying series carries
/// an unparseable start date.
pub fn monthly_rolling_shares(
    payload: &StatsPayload,
    window_size: usize,
    categories: &FuelTechCategories,
) -> Result<Vec<RollingShare>, SeriesError> {
    let energy = extract::extract_monthly(payload, categories)?;
    Ok(rolling_shares(&energy, window_size, categories))
}

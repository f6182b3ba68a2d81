//! Fossil and renewable energy shares for the Australian NEM grid.
//!
//! Fetches monthly and daily per-fuel-technology generation data from
//! OpenElectricity, derives 12-month rolling fossil and renewable shares of
//! total generation plus a trailing-year estimate for the current month, and
//! writes the result as a versioned stats document.

pub mod app;
mod energy;
mod error;
mod openelectricity;
mod output;
mod types;

pub use error::EnergyShareError;
pub use openelectricity::{FetchedStats, OpenElectricity};

pub use energy::extract::{
    extract_daily, extract_monthly, DailyEnergy, FuelTechValues, MonthlyEnergy,
};
pub use energy::monthly_rolling_shares;
pub use energy::rolling::{rolling_shares, CategoryShares, CategoryTotals, RollingShare};
pub use energy::trailing::{trailing_year_share, TrailingWindow};

pub use types::fuel_tech::{FuelCategory, FuelTechCategories};
pub use types::payload::{SeriesHistory, SeriesKind, StatsPayload, StatsSeries};
pub use types::period::Month;

pub use output::precision::format_precision;
pub use output::response::{
    data_series, stats_response, to_json_document, DataSeries, HistoryBlock, StatsResponse,
    FORMAT_VERSION,
};
pub use output::writer::{ensure_output_dir, load_raw, save_processed, save_raw};

pub use energy::error::SeriesError;
pub use output::error::OutputError;

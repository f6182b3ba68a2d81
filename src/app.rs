//! The end-to-end pipeline, from fetch to the written output files.

use crate::energy::extract::{extract_daily, DailyEnergy};
use crate::energy::monthly_rolling_shares;
use crate::energy::trailing::{trailing_year_share, TrailingWindow};
use crate::error::EnergyShareError;
use crate::openelectricity::OpenElectricity;
use crate::output::response::{data_series, stats_response};
use crate::output::writer::{ensure_output_dir, save_processed, save_raw};
use crate::types::fuel_tech::FuelTechCategories;
use crate::types::period::Month;
use chrono::Local;
use log::info;
use std::path::PathBuf;

/// File the fetched monthly payload is written to, verbatim.
pub const RAW_FILENAME: &str = "raw.json";
/// File the processed share document is written to.
pub const PROCESSED_FILENAME: &str = "processed.json";

const FOSSILS_SERIES_ID: &str = "au.nem.fuel_tech_group.fossils.energy_share";
const RENEWABLES_SERIES_ID: &str = "au.nem.fuel_tech_group.renewables.energy_share";
const FOSSILS_DESCRIPTION: &str =
    "12-month rolling average of fossil fuel share of total generation";
const RENEWABLES_DESCRIPTION: &str =
    "12-month rolling average of renewable energy share of total generation";
const DATA_SOURCE: &str = "nemweb";

/// Pipeline settings. The defaults reproduce the published series: the whole
/// network, a 12-month window, files under `output/`.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub region: String,
    pub window_size: usize,
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            region: "_all".to_string(),
            window_size: 12,
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Runs the whole pipeline against the production endpoints with default
/// settings.
///
/// # Errors
///
/// Same failure modes as [`run_with`].
pub async fn run() -> Result<(), EnergyShareError> {
    run_with(&OpenElectricity::new(), &RunConfig::default()).await
}

/// Runs the pipeline against a specific client and configuration.
///
/// Fetches the monthly payload and persists it verbatim, derives the rolling
/// shares, appends the trailing-year estimate labeled with the current
/// month, writes the processed document and prints a console summary.
///
/// # Errors
///
/// Fetch, extraction and write failures are returned as their respective
/// [`EnergyShareError`] variants. A payload with no derivable rolling shares
/// returns [`EnergyShareError::NoData`] after the raw file has been written.
pub async fn run_with(
    client: &OpenElectricity,
    config: &RunConfig,
) -> Result<(), EnergyShareError> {
    let categories = FuelTechCategories::default();

    info!("Fetching monthly energy data");
    let monthly = client.monthly_energy().region(&config.region).call().await?;
    ensure_output_dir(&config.output_dir)?;
    save_raw(&config.output_dir.join(RAW_FILENAME), &monthly.body)?;

    info!("Processing monthly data");
    let rolling = monthly_rolling_shares(&monthly.stats, config.window_size, &categories)?;
    if rolling.is_empty() {
        return Err(EnergyShareError::NoData);
    }

    info!("Estimating the current month from daily data");
    let today = Local::now().date_naive();
    let window = TrailingWindow::ending_yesterday(today);
    let mut daily = DailyEnergy::new();
    for year in window.years() {
        let fetched = client.daily_energy(year).await?;
        daily.extend(extract_daily(&fetched.stats, &categories)?);
    }
    let estimate = trailing_year_share(&daily, &window, &categories);

    let mut dates: Vec<String> = rolling.iter().map(|share| share.month.to_string()).collect();
    let mut fossil_shares: Vec<f64> = rolling.iter().map(|share| share.shares.fossil).collect();
    let mut renewable_shares: Vec<f64> =
        rolling.iter().map(|share| share.shares.renewable).collect();

    let current_month = Month::from_date(today);
    dates.push(current_month.to_string());
    fossil_shares.push(estimate.fossil);
    renewable_shares.push(estimate.renewable);
    info!(
        "Added estimate for {current_month}: fossil {:.2}%, renewable {:.2}%",
        estimate.fossil, estimate.renewable
    );

    let note = format!(
        "Shares calculated as percentage of total generation including all sources. \
         Last value ({current_month}) is an estimate based on 12 months to yesterday"
    );
    let fossils = data_series()
        .id(FOSSILS_SERIES_ID)
        .dates(&dates)
        .values(&fossil_shares)
        .data_type("energy_share")
        .units("%")
        .source(DATA_SOURCE)
        .description(FOSSILS_DESCRIPTION)
        .note(&note)
        .call()?;
    let renewables = data_series()
        .id(RENEWABLES_SERIES_ID)
        .dates(&dates)
        .values(&renewable_shares)
        .data_type("energy_share")
        .units("%")
        .source(DATA_SOURCE)
        .description(RENEWABLES_DESCRIPTION)
        .note(&note)
        .call()?;
    let response = stats_response().data(vec![fossils, renewables]).call();
    save_processed(&config.output_dir.join(PROCESSED_FILENAME), &response)?;

    print_summary(&dates, &fossil_shares, &renewable_shares);
    info!("Processing complete");
    Ok(())
}

/// Prints the head and tail of the combined series as a quick-look table.
fn print_summary(dates: &[String], fossil_shares: &[f64], renewable_shares: &[f64]) {
    let rows = dates.len();
    println!();
    println!("Energy shares over {rows} months:");
    println!("{:<10} {:>8} {:>10}", "month", "fossil", "renewable");
    for index in 0..rows {
        if rows > 10 && index >= 5 && index < rows - 5 {
            if index == 5 {
                println!("{:^10}", "...");
            }
            continue;
        }
        println!(
            "{:<10} {:>7.2}% {:>9.2}%",
            dates[index], fossil_shares[index], renewable_shares[index]
        );
    }
    println!("Shares are percentages of total generation, storage and other sources included.");
}

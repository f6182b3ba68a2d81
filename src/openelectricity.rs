//! The OpenElectricity HTTP client: fetches monthly and daily stats payloads
//! and hands back both the verbatim body and its parsed form.

use crate::error::EnergyShareError;
use crate::types::payload::StatsPayload;
use bon::bon;
use log::{info, warn};
use reqwest::Client;

const API_BASE_URL: &str = "https://openelectricity.org.au";
const STATS_BASE_URL: &str = "https://data.openelectricity.org.au";
const DEFAULT_REGION: &str = "_all";

/// A fetched stats document: the response body exactly as served, plus the
/// payload parsed out of it.
///
/// Keeping the body alongside the parsed form lets the pipeline write the
/// raw file byte-for-byte as the API returned it.
#[derive(Debug, Clone)]
pub struct FetchedStats {
    /// Verbatim response body.
    pub body: String,
    /// The parsed payload the analytics run on.
    pub stats: StatsPayload,
}

/// Client for the OpenElectricity data endpoints.
///
/// Monthly figures come from the website API, daily figures from the
/// per-year v4 stats files. Both base URLs can be overridden, which is how
/// the tests point the client at a local mock server.
pub struct OpenElectricity {
    http: Client,
    api_base: String,
    stats_base: String,
}

#[bon]
impl OpenElectricity {
    /// Creates a client against the production endpoints.
    pub fn new() -> Self {
        Self::with_base_urls(API_BASE_URL, STATS_BASE_URL)
    }

    /// Creates a client against custom endpoint bases.
    pub fn with_base_urls(api_base: impl Into<String>, stats_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
            stats_base: stats_base.into(),
        }
    }

    /// Fetches the monthly energy payload.
    ///
    /// # Arguments
    ///
    /// * `region` (optional) - Network region to query, e.g. `nsw1`.
    ///   Defaults to `_all`, the whole network.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyShareError::NetworkRequest`],
    /// [`EnergyShareError::HttpStatus`] or [`EnergyShareError::Decode`] when
    /// the request, the response status or the payload parse fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nem_energy_shares::{EnergyShareError, OpenElectricity};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), EnergyShareError> {
    ///     let client = OpenElectricity::new();
    ///     let monthly = client.monthly_energy().call().await?;
    ///     println!("fetched {} series", monthly.stats.series().len());
    ///     Ok(())
    /// }
    /// ```
    #[builder]
    pub async fn monthly_energy(
        &self,
        region: Option<&str>,
    ) -> Result<FetchedStats, EnergyShareError> {
        let region = region.unwrap_or(DEFAULT_REGION);
        let url = format!("{}/api/energy?region={region}", self.api_base);
        self.fetch_stats(url).await
    }

    /// Fetches the daily energy payload for one calendar year.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`OpenElectricity::monthly_energy`].
    pub async fn daily_energy(&self, year: i32) -> Result<FetchedStats, EnergyShareError> {
        let url = format!("{}/v4/stats/au/NEM/energy/{year}.json", self.stats_base);
        self.fetch_stats(url).await
    }

    async fn fetch_stats(&self, url: String) -> Result<FetchedStats, EnergyShareError> {
        info!("Fetching energy data from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| EnergyShareError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {url}: {e:?}");
                return Err(if let Some(status) = e.status() {
                    EnergyShareError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    EnergyShareError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| EnergyShareError::NetworkRequest(url.clone(), e))?;
        let stats: StatsPayload =
            serde_json::from_str(&body).map_err(|source| EnergyShareError::Decode { url, source })?;
        info!("Found {} series in the payload", stats.series().len());

        Ok(FetchedStats { body, stats })
    }
}

impl Default for OpenElectricity {
    fn default() -> Self {
        Self::new()
    }
}

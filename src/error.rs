use crate::energy::error::SeriesError;
use crate::output::error::OutputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergyShareError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode the stats payload from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No monthly share data could be derived from the fetched payload")]
    NoData,
}

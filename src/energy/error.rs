use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Failed to parse series start date '{value}'")]
    InvalidStartDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

//! The versioned output document: series and envelope models plus their
//! assembly and serialization.

use crate::output::error::OutputError;
use crate::output::precision::format_precision;
use bon::builder;
use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::value::RawValue;

/// Version tag carried by every output document.
pub const FORMAT_VERSION: &str = "v4";

const DEFAULT_NETWORK: &str = "NEM";
const AEST_OFFSET_SECS: i32 = 10 * 3600;

/// One named series in the output document.
#[derive(Debug, Serialize)]
pub struct DataSeries {
    pub id: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub units: Option<String>,
    pub history: HistoryBlock,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The sample block of an output series.
///
/// `data` holds the formatted samples pre-rendered as a compact JSON array,
/// which is what keeps the arrays on one line inside the indented document.
#[derive(Debug, Serialize)]
pub struct HistoryBlock {
    pub start: Option<String>,
    pub last: Option<String>,
    pub interval: String,
    pub data: Box<RawValue>,
}

/// The output document envelope.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "type")]
    pub response_type: String,
    pub version: String,
    pub network: String,
    pub created_at: String,
    pub data: Vec<DataSeries>,
}

/// Builds one output series, formatting every value to four significant
/// digits and pre-compacting the sample array.
///
/// `data_type` defaults to `history`, `interval` to `1M` and `network` to
/// `NEM`; `units`, `source`, `description` and `note` stay unset unless
/// given.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] when the sample array cannot be
/// rendered, which finite values never trigger.
#[builder]
pub fn data_series(
    id: &str,
    dates: &[String],
    values: &[f64],
    data_type: Option<&str>,
    units: Option<&str>,
    interval: Option<&str>,
    network: Option<&str>,
    source: Option<&str>,
    description: Option<&str>,
    note: Option<&str>,
) -> Result<DataSeries, OutputError> {
    let formatted: Vec<serde_json::Number> = values
        .iter()
        .map(|value| format_precision(*value, 4))
        .collect();
    let compact = serde_json::to_string(&formatted).map_err(OutputError::Serialize)?;
    let data = RawValue::from_string(compact).map_err(OutputError::Serialize)?;
    Ok(DataSeries {
        id: id.to_string(),
        data_type: data_type.unwrap_or("history").to_string(),
        units: units.map(str::to_string),
        history: HistoryBlock {
            start: dates.first().cloned(),
            last: dates.last().cloned(),
            interval: interval.unwrap_or("1M").to_string(),
            data,
        },
        network: network.unwrap_or(DEFAULT_NETWORK).to_string(),
        source: source.map(str::to_string),
        description: description.map(str::to_string),
        note: note.map(str::to_string),
    })
}

/// Builds the document envelope around `data`.
///
/// `response_type` defaults to `energy_share`, `version` to
/// [`FORMAT_VERSION`], `network` to `NEM` and `created_at` to the current
/// time in the fixed UTC+10 offset the network reports in, at seconds
/// precision.
#[builder]
pub fn stats_response(
    data: Vec<DataSeries>,
    response_type: Option<&str>,
    version: Option<&str>,
    network: Option<&str>,
    created_at: Option<DateTime<FixedOffset>>,
) -> StatsResponse {
    let created_at = created_at.unwrap_or_else(aest_now);
    StatsResponse {
        response_type: response_type.unwrap_or("energy_share").to_string(),
        version: version.unwrap_or(FORMAT_VERSION).to_string(),
        network: network.unwrap_or(DEFAULT_NETWORK).to_string(),
        created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, false),
        data,
    }
}

/// Renders `response` as an indented JSON document whose sample arrays stay
/// on one line.
pub fn to_json_document(response: &StatsResponse) -> Result<String, OutputError> {
    serde_json::to_string_pretty(response).map_err(OutputError::Serialize)
}

/// Current time in the network's fixed UTC+10 offset.
fn aest_now() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(AEST_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    fn sample_dates() -> Vec<String> {
        vec!["2024-12".to_string(), "2025-01".to_string()]
    }

    fn fixed_created_at() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(AEST_OFFSET_SECS)
            .unwrap()
            .with_ymd_and_hms(2026, 8, 22, 17, 45, 12)
            .unwrap()
    }

    #[test]
    fn test_data_series_defaults() {
        let dates = sample_dates();
        let series = data_series()
            .id("au.nem.fuel_tech_group.fossils.energy_share")
            .dates(&dates)
            .values(&[75.0, 25.61818])
            .call()
            .unwrap();

        assert_eq!(series.data_type, "history");
        assert_eq!(series.history.interval, "1M");
        assert_eq!(series.network, "NEM");
        assert_eq!(series.units, None);
        assert_eq!(series.history.start.as_deref(), Some("2024-12"));
        assert_eq!(series.history.last.as_deref(), Some("2025-01"));
        assert_eq!(series.history.data.get(), "[75,25.62]");
    }

    #[test]
    fn test_data_series_serialization_shape() {
        let dates = sample_dates();
        let series = data_series()
            .id("au.nem.fuel_tech_group.renewables.energy_share")
            .dates(&dates)
            .values(&[39.4567, 40.12345])
            .data_type("energy_share")
            .units("%")
            .source("nemweb")
            .description("renewable share")
            .call()
            .unwrap();

        let value: Value = serde_json::from_str(&serde_json::to_string(&series).unwrap()).unwrap();
        assert_eq!(value["type"], "energy_share");
        assert_eq!(value["units"], "%");
        assert_eq!(value["source"], "nemweb");
        assert_eq!(value["history"]["data"][0], 39.46);
        assert_eq!(value["history"]["data"][1], 40.12);
        assert!(!value.as_object().unwrap().contains_key("note"));
    }

    #[test]
    fn test_unset_units_serialize_as_null() {
        let dates = sample_dates();
        let series = data_series()
            .id("some.series")
            .dates(&dates)
            .values(&[1.0, 2.0])
            .call()
            .unwrap();

        let value: Value = serde_json::from_str(&serde_json::to_string(&series).unwrap()).unwrap();
        assert!(value.as_object().unwrap().contains_key("units"));
        assert_eq!(value["units"], Value::Null);
    }

    #[test]
    fn test_empty_series_has_no_start_or_last() {
        let series = data_series()
            .id("empty.series")
            .dates(&[])
            .values(&[])
            .call()
            .unwrap();
        assert_eq!(series.history.start, None);
        assert_eq!(series.history.last, None);
        assert_eq!(series.history.data.get(), "[]");
    }

    #[test]
    fn test_envelope_defaults_and_compact_arrays() {
        let dates = sample_dates();
        let series = data_series()
            .id("au.nem.fuel_tech_group.fossils.energy_share")
            .dates(&dates)
            .values(&[75.0, 25.61818])
            .call()
            .unwrap();
        let response = stats_response()
            .data(vec![series])
            .created_at(fixed_created_at())
            .call();

        assert_eq!(response.response_type, "energy_share");
        assert_eq!(response.version, "v4");
        assert_eq!(response.network, "NEM");
        assert_eq!(response.created_at, "2026-08-22T17:45:12+10:00");

        let document = to_json_document(&response).unwrap();
        assert!(document.contains("\"version\": \"v4\""));
        assert!(document.contains("\"data\": [75,25.62]"));

        let reparsed: Value = serde_json::from_str(&document).unwrap();
        assert_eq!(reparsed["data"][0]["history"]["data"][0], 75);
    }

    #[test]
    fn test_default_created_at_uses_the_fixed_offset() {
        let response = stats_response().data(Vec::new()).call();
        assert!(response.created_at.ends_with("+10:00"));
        assert_eq!(response.created_at.len(), "2026-08-22T17:45:12+10:00".len());
    }
}

//! Serde models for the stats payloads served by OpenElectricity, plus the
//! classification of series identifiers into the kinds the pipeline consumes.

use serde::Deserialize;

/// A stats document as returned by the OpenElectricity endpoints.
///
/// The API serves either an envelope object whose `data` field holds the
/// series list, or the bare list itself. [`StatsPayload::series`] normalizes
/// both forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatsPayload {
    /// Envelope form: `{ "data": [...], ... }`.
    Envelope { data: Vec<StatsSeries> },
    /// Bare form: `[...]`.
    Series(Vec<StatsSeries>),
}

impl StatsPayload {
    /// The series list, whichever form the payload used.
    pub fn series(&self) -> &[StatsSeries] {
        match self {
            StatsPayload::Envelope { data } => data,
            StatsPayload::Series(series) => series,
        }
    }
}

/// One named series within a stats payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsSeries {
    /// Dotted identifier, e.g. `au.nem.fuel_tech.coal_black.energy`.
    pub id: String,
    /// The sample block; absent on metadata-only entries.
    #[serde(default)]
    pub history: Option<SeriesHistory>,
}

/// The sample block of a series: a start instant and one sample per period.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesHistory {
    /// Start of the first period, ISO-8601 with or without a UTC offset.
    pub start: String,
    /// Declared sample interval, `"1M"` or `"1D"` where present.
    #[serde(default)]
    pub interval: Option<String>,
    /// One sample per period; `null` means no data for that period, not zero.
    pub data: Vec<Option<f64>>,
}

/// What a series identifier says the series contains.
///
/// Identifiers follow `<network>.<region>.fuel_tech.<tech>.<metric>`. Only
/// per-fuel-technology energy series feed the share calculation; market
/// value, emissions, and anything with too few segments is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind<'a> {
    /// Per-fuel-technology generated energy, carrying the technology code.
    FuelTechEnergy { fuel_tech: &'a str },
    /// Anything the pipeline does not consume.
    Other,
}

impl StatsSeries {
    /// Classifies this series by its identifier segments.
    pub fn kind(&self) -> SeriesKind<'_> {
        let parts: Vec<&str> = self.id.split('.').collect();
        if parts.len() >= 5 && parts[2] == "fuel_tech" && parts[4] == "energy" {
            SeriesKind::FuelTechEnergy { fuel_tech: parts[3] }
        } else {
            SeriesKind::Other
        }
    }
}

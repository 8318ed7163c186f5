use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Tag distinguishing an observed reading from a projected one.
///
/// Forecast rows never represent an actual reading, so marker presentation
/// skips them entirely; the chart renders them with dashed segments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    #[default]
    Past,
    Forecast,
}

/// One per-AOI per-date record from the data feed.
///
/// Immutable once loaded. The full collection is replaced wholesale on every
/// load cycle; there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub aoi: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub price_shift3: Option<f64>,
    #[serde(default)]
    pub kind: Kind,
}

impl Observation {
    pub fn is_forecast(&self) -> bool {
        self.kind == Kind::Forecast
    }
}

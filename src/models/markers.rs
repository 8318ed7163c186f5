use eframe::egui::Color32;

use crate::config::plot::PLOT_CONFIG;
use crate::config::thresholds::Thresholds;
use crate::domain::{AoiConfig, RiskBand};
use crate::models::reconcile::ObservationSet;
use crate::models::selection::SelectionSet;

/// Everything the map surface needs to draw one AOI marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerModel {
    pub key: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub color: Color32,
    pub popup: String,
    /// Deselected markers render dimmed.
    pub selected: bool,
}

/// Build one marker per configured AOI from its most recent non-forecast
/// observation. An AOI with no actual reading at all is shown as zero risk
/// with an "N/A" date.
pub fn build_markers(
    set: &ObservationSet,
    selection: &SelectionSet,
    aois: &[AoiConfig],
    thresholds: &Thresholds,
) -> Vec<MarkerModel> {
    aois.iter()
        .map(|aoi| {
            let latest = set.latest_actual(aoi.key);
            let score = latest.and_then(|obs| obs.rsi).unwrap_or(0.0);
            let date_text = latest
                .map(|obs| obs.date.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            MarkerModel {
                key: aoi.key.to_string(),
                name: aoi.name.to_string(),
                lat: aoi.lat,
                lon: aoi.lon,
                color: band_color(RiskBand::classify(score, thresholds)),
                popup: format!("AOI: {}\nDate: {}\nRSI: {:.2}", aoi.name, date_text, score),
                selected: selection.is_selected(aoi.key),
            }
        })
        .collect()
}

/// Degraded presentation for the failed-load state: one gray marker per
/// configured AOI, labeled unavailable.
pub fn unavailable_markers(aois: &[AoiConfig]) -> Vec<MarkerModel> {
    aois.iter()
        .map(|aoi| MarkerModel {
            key: aoi.key.to_string(),
            name: aoi.name.to_string(),
            lat: aoi.lat,
            lon: aoi.lon,
            color: PLOT_CONFIG.marker_unavailable_color,
            popup: format!("RSI data unavailable for {}", aoi.name),
            selected: false,
        })
        .collect()
}

fn band_color(band: RiskBand) -> Color32 {
    match band {
        RiskBand::Low => PLOT_CONFIG.marker_low_color,
        RiskBand::Elevated => PLOT_CONFIG.marker_elevated_color,
        RiskBand::High => PLOT_CONFIG.marker_high_color,
    }
}

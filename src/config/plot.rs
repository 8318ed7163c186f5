//! Plot and marker visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // Score datasets cycle this warm palette by selection index.
    pub score_palette: &'static [Color32],
    // Price datasets share one blue hue; each selection index fades the
    // alpha by `price_alpha_step` so overlapping AOIs stay readable.
    pub price_base_color: Color32,
    pub price_alpha_step: f32,
    /// Line width for both dataset families
    pub series_line_width: f32,
    /// Dash length for forecast segments
    pub forecast_dash_length: f32,
    /// Fill for the shaded "projected, not observed" region
    pub forecast_box_color: Color32,
    pub warn_line_color: Color32,
    pub alert_line_color: Color32,
    pub threshold_line_width: f32,
    pub threshold_dash_length: f32,

    // Marker styling
    pub marker_radius: f32,
    pub marker_low_color: Color32,
    pub marker_elevated_color: Color32,
    pub marker_high_color: Color32,
    pub marker_unavailable_color: Color32,
    /// Opacity multiplier for markers of deselected AOIs
    pub marker_dim_factor: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    score_palette: &[
        Color32::from_rgb(255, 77, 122), // Rose
        Color32::from_rgb(255, 159, 64), // Orange
        Color32::from_rgb(255, 205, 86), // Amber
    ],
    price_base_color: Color32::from_rgb(77, 163, 255), // Sky blue
    price_alpha_step: 0.2,
    series_line_width: 1.5,
    forecast_dash_length: 5.0,
    forecast_box_color: Color32::from_rgba_premultiplied(100, 100, 100, 20),
    warn_line_color: Color32::from_rgb(255, 165, 0), // Orange
    alert_line_color: Color32::from_rgb(220, 40, 40), // Red
    threshold_line_width: 2.0,
    threshold_dash_length: 5.0,

    marker_radius: 8.0,
    marker_low_color: Color32::from_rgb(40, 170, 60),
    marker_elevated_color: Color32::from_rgb(255, 165, 0),
    marker_high_color: Color32::from_rgb(220, 40, 40),
    marker_unavailable_color: Color32::GRAY,
    marker_dim_factor: 0.35,
};

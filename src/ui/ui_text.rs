//! All user-facing strings in one place.

pub struct UiText {
    pub app_title: &'static str,

    // Side panel
    pub aoi_selector_heading: &'static str,
    pub status_heading: &'static str,
    pub status_loading: &'static str,
    pub status_loaded_prefix: &'static str,
    pub status_failed: &'static str,
    pub reload_countdown_prefix: &'static str,
    pub reload_disabled: &'static str,

    // Map panel
    pub map_heading: &'static str,
    pub lon_axis: &'static str,
    pub lat_axis: &'static str,

    // Chart panel
    pub chart_heading: &'static str,
    pub chart_placeholder: &'static str,
    pub chart_failed: &'static str,
    pub chart_loading: &'static str,
    pub score_axis: &'static str,
    pub price_axis: &'static str,
    pub warn_label: &'static str,
    pub alert_label: &'static str,
    pub forecast_label: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "RSI Scope",

    aoi_selector_heading: "Areas of Interest",
    status_heading: "Status",
    status_loading: "Loading observation feed…",
    status_loaded_prefix: "Loaded ",
    status_failed: "Feed unavailable",
    reload_countdown_prefix: "Next reload in ",
    reload_disabled: "Auto-reload off",

    map_heading: "Risk Map",
    lon_axis: "Longitude",
    lat_axis: "Latitude",

    chart_heading: "RSI vs Price",
    chart_placeholder: "Please select an AOI to display the chart.",
    chart_failed: "Chart data failed to load.",
    chart_loading: "Loading chart data…",
    score_axis: "RSI",
    price_axis: "Price (shift3)",
    warn_label: "Warn",
    alert_label: "Alert",
    forecast_label: "Forecast",
};

use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub placeholder: Color32,
    pub failure: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub map_height_fraction: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 205, 86),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(22, 26, 32),
        side_panel: Color32::from_rgb(25, 25, 25),
        placeholder: Color32::from_rgb(136, 136, 136),
        failure: Color32::from_rgb(220, 90, 90),
    },
    map_height_fraction: 0.45,
};

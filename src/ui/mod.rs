// User interface components
pub mod app;
pub mod chart_view;
pub mod config;
pub mod map_view;
pub mod panels;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::RsiScopeApp;
pub use config::UI_CONFIG;

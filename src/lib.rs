#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use data::{HttpSource, ObservationSource, StaticSource, load_observations};
pub use domain::{AoiConfig, Kind, Observation, RiskBand};
pub use models::{ChartModel, MarkerModel, Session};
pub use ui::RsiScopeApp;

use std::time::Duration;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Observation feed URL; overrides the built-in default
    #[arg(long)]
    pub data_url: Option<String>,

    /// Seconds between automatic full reloads
    #[arg(long)]
    pub reload_secs: Option<u64>,

    /// Disable the automatic reload cycle entirely
    #[arg(long, default_value_t = false)]
    pub no_reload: bool,
}

impl Cli {
    pub fn effective_url(&self) -> String {
        self.data_url
            .clone()
            .unwrap_or_else(|| config::DATA_SOURCE.url.to_string())
    }

    pub fn effective_reload(&self) -> Option<Duration> {
        if self.no_reload {
            return None;
        }
        let secs = self
            .reload_secs
            .unwrap_or(config::DATA_SOURCE.reload_interval_secs);
        Some(Duration::from_secs(secs))
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    runtime: tokio::runtime::Handle,
    initial: Result<(Vec<Observation>, &'static str), String>,
    cli: &Cli,
) -> Box<dyn eframe::App> {
    let app = ui::RsiScopeApp::new(
        cc,
        runtime,
        initial,
        cli.effective_url(),
        cli.effective_reload(),
    );
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_fall_back_to_config() {
        let cli = Cli::parse_from(["rsi-scope"]);
        assert_eq!(cli.effective_url(), config::DATA_SOURCE.url);
        assert_eq!(
            cli.effective_reload(),
            Some(Duration::from_secs(config::DATA_SOURCE.reload_interval_secs))
        );
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let cli = Cli::parse_from([
            "rsi-scope",
            "--data-url",
            "http://example.com/feed.json",
            "--reload-secs",
            "5",
        ]);
        assert_eq!(cli.effective_url(), "http://example.com/feed.json");
        assert_eq!(cli.effective_reload(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn no_reload_disables_the_cycle() {
        let cli = Cli::parse_from(["rsi-scope", "--no-reload", "--reload-secs", "5"]);
        assert_eq!(cli.effective_reload(), None);
    }
}

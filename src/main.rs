#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use rsi_scope::{Cli, HttpSource, ObservationSource, load_observations, run_app};

fn main() -> eframe::Result {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // Initial load happens before the window opens, same as the reload
    // cycle later. The runtime stays on main's stack so background reloads
    // can keep borrowing its handle.
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let sources: Vec<Box<dyn ObservationSource>> =
        vec![Box::new(HttpSource {
            url: args.effective_url(),
        })];
    let initial = rt
        .block_on(load_observations(&sources))
        .map_err(|e| format!("{e:#}"));
    if let Err(message) = &initial {
        log::warn!("Initial load failed: {message}");
    }

    let handle = rt.handle().clone();
    eframe::run_native(
        "RSI Scope",
        NativeOptions::default(),
        Box::new(move |cc| Ok(run_app(cc, handle, initial, &args))),
    )
}

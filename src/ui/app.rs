use std::time::{Duration, Instant};

use eframe::{Frame, egui};
use poll_promise::Promise;
use tokio::runtime::Handle;

use crate::data::{HttpSource, ObservationSource, load_observations};
use crate::domain::Observation;
use crate::models::{LoadPhase, Session};
use crate::ui::chart_view::ChartView;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::map_view::MapView;
use crate::ui::panels::{AoiSelectorPanel, Panel};
use crate::ui::utils::{colored_subsection_heading, section_heading, setup_custom_visuals};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Outcome of one background load: the sorted records plus the signature of
/// the source that produced them, or a displayable failure message.
type LoadOutcome = Result<(Vec<Observation>, &'static str), String>;

pub struct RsiScopeApp {
    session: Session,
    map_view: MapView,
    chart_view: ChartView,

    // Handle into the runtime owned by main; background reloads block on it
    // from a worker thread, never from the UI thread.
    runtime: Handle,
    data_url: String,
    reload_interval: Option<Duration>,

    last_load_finished: Instant,
    load_promise: Option<Promise<LoadOutcome>>,
    source_signature: Option<&'static str>,
}

impl RsiScopeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Handle,
        initial: LoadOutcome,
        data_url: String,
        reload_interval: Option<Duration>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut session = Session::new(crate::config::AOIS, crate::config::THRESHOLDS);
        let mut source_signature = None;
        match initial {
            Ok((records, signature)) => {
                session.load_succeeded(records);
                source_signature = Some(signature);
            }
            Err(message) => session.load_failed(message),
        }

        Self {
            session,
            map_view: MapView::new(),
            chart_view: ChartView::new(),
            runtime,
            data_url,
            reload_interval,
            last_load_finished: Instant::now(),
            load_promise: None,
            source_signature,
        }
    }

    /// Drop everything and refetch, exactly as if the page were reopened.
    fn begin_reload(&mut self) {
        if self.load_promise.is_some() {
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_reload {
            log::info!("Reload cycle starting");
        }

        self.session.begin_reload();
        self.source_signature = None;

        let handle = self.runtime.clone();
        let url = self.data_url.clone();
        self.load_promise = Some(Promise::spawn_thread("observation_reload", move || {
            let sources: Vec<Box<dyn ObservationSource>> = vec![Box::new(HttpSource { url })];
            handle
                .block_on(load_observations(&sources))
                .map_err(|e| format!("{e:#}"))
        }));
    }

    fn poll_reload(&mut self) {
        let ready = self
            .load_promise
            .as_ref()
            .is_some_and(|promise| promise.ready().is_some());
        if !ready {
            return;
        }

        let Some(promise) = self.load_promise.take() else {
            return;
        };
        let outcome = match promise.try_take() {
            Ok(outcome) => outcome,
            Err(promise) => {
                self.load_promise = Some(promise);
                return;
            }
        };

        self.last_load_finished = Instant::now();
        match outcome {
            Ok((records, signature)) => {
                self.session.load_succeeded(records);
                self.source_signature = Some(signature);
            }
            Err(message) => {
                log::warn!("Reload failed: {message}");
                self.session.load_failed(message);
            }
        }
    }

    fn maybe_schedule_reload(&mut self, ctx: &egui::Context) {
        let Some(interval) = self.reload_interval else {
            return;
        };

        if self.load_promise.is_none() && self.last_load_finished.elapsed() >= interval {
            self.begin_reload();
        }

        // Wake up without user input so the timer can fire.
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("control_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading(UI_TEXT.app_title);

                let toggled = AoiSelectorPanel::new(self.session.aois(), self.session.selection())
                    .render(ui);
                for key in toggled {
                    self.session.toggle_aoi(&key);
                }

                section_heading(ui, UI_TEXT.status_heading);
                match self.session.phase() {
                    LoadPhase::Loading => {
                        ui.label(UI_TEXT.status_loading);
                    }
                    LoadPhase::Loaded => {
                        let mut status = format!(
                            "{}{} records",
                            UI_TEXT.status_loaded_prefix,
                            self.session.observations().record_count()
                        );
                        if let Some(signature) = self.source_signature {
                            status.push_str(&format!(" ({signature})"));
                        }
                        ui.label(status);
                    }
                    LoadPhase::Failed(message) => {
                        ui.label(
                            egui::RichText::new(UI_TEXT.status_failed)
                                .color(UI_CONFIG.colors.failure),
                        );
                        ui.label(egui::RichText::new(message).small());
                    }
                }

                ui.add_space(5.0);
                match self.reload_interval {
                    Some(interval) => {
                        let remaining =
                            interval.saturating_sub(self.last_load_finished.elapsed());
                        ui.label(format!(
                            "{}{}s",
                            UI_TEXT.reload_countdown_prefix,
                            remaining.as_secs()
                        ));
                    }
                    None => {
                        ui.label(UI_TEXT.reload_disabled);
                    }
                }
            });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_height();
            let map_height = available * UI_CONFIG.map_height_fraction;
            let chart_height = (available - map_height - 60.0).max(120.0);

            ui.label(colored_subsection_heading(UI_TEXT.map_heading));
            let markers = self.session.markers();
            let clicked = self.map_view.show(ui, &markers, map_height);
            for key in clicked {
                self.session.toggle_aoi(&key);
            }

            ui.add_space(8.0);
            ui.label(colored_subsection_heading(UI_TEXT.chart_heading));
            let chart = self.session.chart();
            self.chart_view
                .show(ui, chart.as_ref(), self.session.phase(), chart_height);
        });
    }
}

impl eframe::App for RsiScopeApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight reload so its sender does not outlive the app.
        self.load_promise = None;
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_reload();
        self.maybe_schedule_reload(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
    }
}

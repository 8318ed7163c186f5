use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{
    AxisHints, Corner, HLine, HPlacement, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints,
    Points, Polygon,
};

use crate::config::plot::PLOT_CONFIG;
use crate::models::projection::{ChartModel, SeriesAxis};
use crate::models::reconcile::SeriesPoint;
use crate::models::session::LoadPhase;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::{date_to_x, format_x_date};

/// The chart display surface: score and price series on a shared date axis.
///
/// Rebuilt from the current `ChartModel` every frame, so a re-projection
/// fully replaces whatever was rendered before; there is no retained chart
/// instance to go stale.
#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        model: Option<&ChartModel>,
        phase: &LoadPhase,
        height: f32,
    ) {
        match phase {
            LoadPhase::Loading => {
                placeholder(ui, UI_TEXT.chart_loading, UI_CONFIG.colors.placeholder, height);
            }
            LoadPhase::Failed(message) => {
                placeholder(ui, UI_TEXT.chart_failed, UI_CONFIG.colors.failure, height);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(message)
                            .small()
                            .color(UI_CONFIG.colors.placeholder),
                    );
                });
            }
            LoadPhase::Loaded => match model {
                Some(model) => self.render_chart(ui, model, height),
                None => {
                    placeholder(
                        ui,
                        UI_TEXT.chart_placeholder,
                        UI_CONFIG.colors.placeholder,
                        height,
                    );
                }
            },
        }
    }

    fn render_chart(&mut self, ui: &mut Ui, model: &ChartModel, height: f32) {
        let price_bounds = model.price_bounds;
        let price_formatter = move |mark: egui_plot::GridMark,
                                    _range: &std::ops::RangeInclusive<f64>| {
            match price_bounds {
                Some((lo, hi)) if hi > lo => format!("${:.2}", lo + mark.value * (hi - lo)),
                Some((lo, _)) => format!("${:.2}", lo),
                None => String::new(),
            }
        };

        Plot::new("rsi_price_chart")
            .height(height)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![
                AxisHints::new_x().formatter(|mark, _range| format_x_date(mark.value)),
            ])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .label(UI_TEXT.score_axis)
                    .placement(HPlacement::Left)
                    .formatter(|mark, _range| format!("{:.2}", mark.value)),
                AxisHints::new_y()
                    .label(UI_TEXT.price_axis)
                    .placement(HPlacement::Right)
                    .formatter(price_formatter),
            ])
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                let x_min = date_to_x(model.x_span.0);
                let x_max = date_to_x(model.x_span.1);
                let pad = ((x_max - x_min) * 0.02).max(0.5);
                plot_ui.set_plot_bounds_x(x_min - pad..=x_max + pad);
                plot_ui.set_plot_bounds_y(-0.05..=1.05);

                // Shaded "projected, not observed" region. With no forecast
                // rows the span collapses to the last date and draws nothing
                // visible.
                let fx0 = date_to_x(model.forecast_span.0);
                let fx1 = date_to_x(model.forecast_span.1);
                plot_ui.polygon(
                    Polygon::new(
                        UI_TEXT.forecast_label,
                        PlotPoints::new(vec![
                            [fx0, 0.0],
                            [fx1, 0.0],
                            [fx1, 1.0],
                            [fx0, 1.0],
                        ]),
                    )
                    .fill_color(PLOT_CONFIG.forecast_box_color)
                    .stroke(Stroke::NONE),
                );

                // Static threshold reference lines on the score axis.
                plot_ui.hline(
                    HLine::new(UI_TEXT.warn_label, model.thresholds.warn)
                        .color(PLOT_CONFIG.warn_line_color)
                        .width(PLOT_CONFIG.threshold_line_width)
                        .style(LineStyle::Dashed {
                            length: PLOT_CONFIG.threshold_dash_length,
                        }),
                );
                plot_ui.hline(
                    HLine::new(UI_TEXT.alert_label, model.thresholds.alert)
                        .color(PLOT_CONFIG.alert_line_color)
                        .width(PLOT_CONFIG.threshold_line_width)
                        .style(LineStyle::Dashed {
                            length: PLOT_CONFIG.threshold_dash_length,
                        }),
                );

                for dataset in &model.datasets {
                    let to_y = |point: &SeriesPoint| match dataset.axis {
                        SeriesAxis::Score => point.value,
                        SeriesAxis::Price => model.price_to_axis(point.value),
                    };

                    // A lone surviving point has no segment to draw it.
                    if dataset.points.len() == 1 {
                        let point = &dataset.points[0];
                        plot_ui.points(
                            Points::new(
                                dataset.label.clone(),
                                PlotPoints::new(vec![[date_to_x(point.date), to_y(point)]]),
                            )
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(3.0)
                            .color(dataset.color),
                        );
                        continue;
                    }

                    // Same label on every run keeps one legend entry per
                    // dataset while the stroke switches at the forecast
                    // boundary.
                    for run in dataset.segments() {
                        let points: Vec<[f64; 2]> = run
                            .points
                            .iter()
                            .map(|p| [date_to_x(p.date), to_y(p)])
                            .collect();

                        let mut line = Line::new(dataset.label.clone(), PlotPoints::new(points))
                            .color(dataset.color)
                            .width(PLOT_CONFIG.series_line_width);
                        if run.dashed {
                            line = line.style(LineStyle::Dashed {
                                length: PLOT_CONFIG.forecast_dash_length,
                            });
                        }
                        plot_ui.line(line);
                    }
                }
            });
    }
}

fn placeholder(ui: &mut Ui, text: &str, color: eframe::egui::Color32, height: f32) {
    ui.vertical_centered(|ui| {
        ui.add_space(height * 0.3);
        ui.label(RichText::new(text).color(color));
    });
}

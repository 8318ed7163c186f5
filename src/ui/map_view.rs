use eframe::egui::{Id, LayerId, Order::Tooltip, RichText, Ui};
use egui_plot::{AxisHints, HPlacement, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use crate::config::plot::PLOT_CONFIG;
use crate::models::MarkerModel;
use crate::ui::config::UI_TEXT;

// Whole-world bounding box; panning cannot leave it.
const LON_RANGE: (f64, f64) = (-180.0, 180.0);
const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Extra screen-space slack around a marker for hover/click hit-testing.
const HIT_SLACK_PX: f32 = 2.0;

/// The map display surface: AOI markers on a lon/lat plot.
#[derive(Default)]
pub struct MapView;

impl MapView {
    pub fn new() -> Self {
        Self
    }

    /// Render the map; returns the keys of any markers clicked this frame.
    pub fn show(&mut self, ui: &mut Ui, markers: &[MarkerModel], height: f32) -> Vec<String> {
        let mut events = Vec::new();

        Plot::new("aoi_map")
            .height(height)
            .data_aspect(1.0)
            .custom_x_axes(vec![AxisHints::new_x().label(UI_TEXT.lon_axis)])
            .custom_y_axes(vec![
                AxisHints::new_y()
                    .label(UI_TEXT.lat_axis)
                    .placement(HPlacement::Left),
            ])
            .label_formatter(|_, _| String::new())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                // Keep the viewport inside the world box regardless of how
                // far the user dragged or zoomed.
                let bounds = plot_ui.plot_bounds();
                let (x_lo, x_hi) = clamp_window(
                    bounds.min()[0],
                    bounds.max()[0],
                    LON_RANGE.0,
                    LON_RANGE.1,
                );
                let (y_lo, y_hi) = clamp_window(
                    bounds.min()[1],
                    bounds.max()[1],
                    LAT_RANGE.0,
                    LAT_RANGE.1,
                );
                if (x_lo, x_hi) != (bounds.min()[0], bounds.max()[0]) {
                    plot_ui.set_plot_bounds_x(x_lo..=x_hi);
                }
                if (y_lo, y_hi) != (bounds.min()[1], bounds.max()[1]) {
                    plot_ui.set_plot_bounds_y(y_lo..=y_hi);
                }

                for marker in markers {
                    let color = if marker.selected {
                        marker.color
                    } else {
                        marker.color.gamma_multiply(PLOT_CONFIG.marker_dim_factor)
                    };

                    plot_ui.points(
                        Points::new(
                            marker.name.clone(),
                            PlotPoints::new(vec![[marker.lon, marker.lat]]),
                        )
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(PLOT_CONFIG.marker_radius)
                        .color(color),
                    );
                }

                // Manual hit test in screen space so the clickable area
                // matches the drawn radius at any zoom level.
                let hovered = plot_ui.pointer_coordinate().and_then(|pointer| {
                    let transform = *plot_ui.transform();
                    let pointer_px = transform.position_from_point(&pointer);
                    markers.iter().find(|marker| {
                        let marker_px = transform
                            .position_from_point(&PlotPoint::new(marker.lon, marker.lat));
                        marker_px.distance(pointer_px)
                            <= PLOT_CONFIG.marker_radius + HIT_SLACK_PX
                    })
                });

                if let Some(marker) = hovered {
                    let tooltip_layer = LayerId::new(Tooltip, Id::new("marker_tooltips"));

                    #[allow(deprecated)]
                    show_tooltip_at_pointer(
                        plot_ui.ctx(),
                        tooltip_layer,
                        Id::new(format!("marker_{}", marker.key)),
                        |ui: &mut Ui| {
                            ui.label(RichText::new(marker.name.clone()).strong().color(marker.color));
                            ui.separator();
                            for line in marker.popup.lines() {
                                ui.label(line);
                            }
                        },
                    );

                    if plot_ui.response().clicked() {
                        events.push(marker.key.clone());
                    }
                }
            });

        events
    }
}

/// Shift a 1-D window back inside [min, max], preserving its width where
/// possible; a window wider than the limits collapses onto them.
fn clamp_window(lo: f64, hi: f64, min: f64, max: f64) -> (f64, f64) {
    let width = (hi - lo).min(max - min);
    let lo = lo.clamp(min, max - width);
    (lo, lo + width)
}

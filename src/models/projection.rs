use chrono::NaiveDate;
use eframe::egui::Color32;
use itertools::Itertools;

use crate::config::aois::find_aoi;
use crate::config::plot::PLOT_CONFIG;
use crate::config::thresholds::Thresholds;
use crate::domain::Kind;
use crate::models::reconcile::{ObservationSet, SeriesPoint};
use crate::models::selection::SelectionSet;

/// Which y-axis a dataset is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesAxis {
    /// Left axis, bounded [0,1]
    Score,
    /// Right axis, unbounded
    Price,
}

/// One plottable line: an ordered, gap-free sequence of points for one AOI
/// on one axis, with its assigned color.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub color: Color32,
    pub axis: SeriesAxis,
    pub points: Vec<SeriesPoint>,
}

/// A maximal polyline run sharing one stroke style.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRun {
    pub points: Vec<SeriesPoint>,
    pub dashed: bool,
}

impl ChartDataset {
    /// Split the polyline into solid/dashed runs.
    ///
    /// A segment is dashed when its right-hand endpoint is a forecast point;
    /// this is decided per segment, not per series, so a line can cross from
    /// solid into dashed at the forecast boundary.
    pub fn segments(&self) -> Vec<SegmentRun> {
        let mut runs: Vec<SegmentRun> = Vec::new();
        for (a, b) in self.points.iter().tuple_windows() {
            let dashed = b.kind == Kind::Forecast;
            match runs.last_mut() {
                Some(run) if run.dashed == dashed => run.points.push(*b),
                _ => runs.push(SegmentRun {
                    points: vec![*a, *b],
                    dashed,
                }),
            }
        }
        runs
    }
}

/// Plotting-ready configuration derived from one (observations, selection)
/// pair. A pure value; the chart view rebuilds its plot from it each frame,
/// so re-projection fully replaces whatever was rendered before.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    /// Score datasets first, then price datasets, each ordered by the
    /// canonical AOI order.
    pub datasets: Vec<ChartDataset>,
    /// First and last date of the shared x-axis domain.
    pub x_span: (NaiveDate, NaiveDate),
    /// Shaded "projected, not observed" region: earliest forecast date to
    /// the end of the domain. Collapses to the last date when the feed has
    /// no forecast rows.
    pub forecast_span: (NaiveDate, NaiveDate),
    pub thresholds: Thresholds,
    /// Min/max over every visible price point; `None` when no price point
    /// survived projection.
    pub price_bounds: Option<(f64, f64)>,
}

impl ChartModel {
    /// Map a raw price into the normalized [0,1] plot space shared with the
    /// score axis. A degenerate price range maps to mid-axis.
    pub fn price_to_axis(&self, value: f64) -> f64 {
        match self.price_bounds {
            Some((lo, hi)) if hi > lo => (value - lo) / (hi - lo),
            _ => 0.5,
        }
    }

    /// Inverse of `price_to_axis`, for right-axis tick labels.
    pub fn axis_to_price(&self, y: f64) -> Option<f64> {
        self.price_bounds.map(|(lo, hi)| {
            if hi > lo {
                lo + y * (hi - lo)
            } else {
                lo
            }
        })
    }
}

/// Turn reconciled series plus the current selection into a chart model.
///
/// Returns `None` when nothing can be charted (empty selection, or a domain
/// with no dates at all); the caller renders a textual placeholder instead.
pub fn project(
    set: &ObservationSet,
    selection: &SelectionSet,
    thresholds: Thresholds,
) -> Option<ChartModel> {
    if selection.is_empty() {
        return None;
    }
    let (&first_date, &last_date) = (set.date_domain().first()?, set.date_domain().last()?);

    let selected = selection.selected_in_order(set.aoi_order());

    let mut datasets: Vec<ChartDataset> = Vec::with_capacity(selected.len() * 2);
    for (index, aoi) in selected.iter().enumerate() {
        datasets.push(ChartDataset {
            label: format!("RSI ({})", display_name(aoi)),
            color: score_color(index),
            axis: SeriesAxis::Score,
            points: set.score_points(aoi),
        });
    }
    for (index, aoi) in selected.iter().enumerate() {
        datasets.push(ChartDataset {
            label: format!("Price ({}) (shift3)", display_name(aoi)),
            color: price_color(index),
            axis: SeriesAxis::Price,
            points: set.price_points(aoi),
        });
    }

    let price_bounds = datasets
        .iter()
        .filter(|ds| ds.axis == SeriesAxis::Price)
        .flat_map(|ds| ds.points.iter().map(|p| p.value))
        .fold(None, |acc: Option<(f64, f64)>, v| {
            Some(match acc {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            })
        });

    let boundary = set.first_forecast_date().unwrap_or(last_date);

    Some(ChartModel {
        datasets,
        x_span: (first_date, last_date),
        forecast_span: (boundary, last_date),
        thresholds,
        price_bounds,
    })
}

fn display_name(key: &str) -> String {
    find_aoi(key)
        .map(|aoi| aoi.name.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Score datasets cycle the warm palette by selection index.
fn score_color(index: usize) -> Color32 {
    let palette = PLOT_CONFIG.score_palette;
    palette[index % palette.len()]
}

/// Price datasets share one hue; the alpha fades with the selection index.
fn price_color(index: usize) -> Color32 {
    let alpha = (1.0 - index as f32 * PLOT_CONFIG.price_alpha_step).max(0.2);
    PLOT_CONFIG.price_base_color.gamma_multiply(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn obs(aoi: &str, d: &str, rsi: Option<f64>, price: Option<f64>, kind: Kind) -> Observation {
        Observation {
            aoi: aoi.to_string(),
            date: date(d),
            rsi,
            price_shift3: price,
            kind,
        }
    }

    fn order() -> Vec<String> {
        vec!["ashburn".into(), "phoenix".into(), "dallas".into()]
    }

    const DEFAULTS: Thresholds = Thresholds {
        warn: 0.5,
        alert: 0.75,
    };

    #[test]
    fn empty_selection_projects_to_placeholder() {
        let set = ObservationSet::new(
            vec![obs("ashburn", "2024-01-01", Some(0.3), Some(100.0), Kind::Past)],
            &order(),
        );
        let mut selection = SelectionSet::all(&order());
        for key in order() {
            selection.toggle(&key);
        }

        assert!(project(&set, &selection, DEFAULTS).is_none());
    }

    #[test]
    fn single_aoi_scenario_end_to_end() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.3), Some(100.0), Kind::Past),
                obs("ashburn", "2024-01-02", Some(0.8), None, Kind::Forecast),
            ],
            &order(),
        );
        let mut selection = SelectionSet::all(&order());
        selection.toggle("phoenix");
        selection.toggle("dallas");

        let model = project(&set, &selection, DEFAULTS).unwrap();
        assert_eq!(model.datasets.len(), 2);

        let score = &model.datasets[0];
        assert_eq!(score.axis, SeriesAxis::Score);
        assert_eq!(score.points.len(), 2);
        assert_eq!(score.points[0].value, 0.3);
        assert_eq!(score.points[0].kind, Kind::Past);
        assert_eq!(score.points[1].value, 0.8);
        assert_eq!(score.points[1].kind, Kind::Forecast);

        // One dashed segment joining the past point to the forecast point.
        let runs = score.segments();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].dashed);
        assert_eq!(runs[0].points.len(), 2);

        // No fallback exists for the second date, so the price series keeps
        // only the first point.
        let price = &model.datasets[1];
        assert_eq!(price.axis, SeriesAxis::Price);
        assert_eq!(price.points.len(), 1);
        assert_eq!(price.points[0].date, date("2024-01-01"));
        assert_eq!(price.points[0].value, 100.0);

        // Forecast box collapses onto the forecast date (also the last date).
        assert_eq!(
            model.forecast_span,
            (date("2024-01-02"), date("2024-01-02"))
        );
    }

    #[test]
    fn double_toggle_produces_identical_projection() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.3), Some(100.0), Kind::Past),
                obs("phoenix", "2024-01-02", Some(0.6), Some(105.0), Kind::Past),
            ],
            &order(),
        );
        let mut selection = SelectionSet::all(&order());

        let before = project(&set, &selection, DEFAULTS);
        selection.toggle("dallas");
        selection.toggle("dallas");
        let after = project(&set, &selection, DEFAULTS);

        assert_eq!(before, after);
    }

    #[test]
    fn forecast_span_covers_trailing_forecast_dates() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.1), None, Kind::Past),
                obs("ashburn", "2024-01-02", Some(0.2), None, Kind::Past),
                obs("ashburn", "2024-01-03", Some(0.3), None, Kind::Past),
                obs("ashburn", "2024-01-04", Some(0.4), None, Kind::Forecast),
                obs("ashburn", "2024-01-05", Some(0.5), None, Kind::Forecast),
            ],
            &order(),
        );
        let selection = SelectionSet::all(&order());

        let model = project(&set, &selection, DEFAULTS).unwrap();
        assert_eq!(
            model.forecast_span,
            (date("2024-01-04"), date("2024-01-05"))
        );
    }

    #[test]
    fn forecast_span_collapses_without_forecast_rows() {
        let set = ObservationSet::new(
            vec![
                obs("ashburn", "2024-01-01", Some(0.1), None, Kind::Past),
                obs("ashburn", "2024-01-02", Some(0.2), None, Kind::Past),
            ],
            &order(),
        );
        let selection = SelectionSet::all(&order());

        let model = project(&set, &selection, DEFAULTS).unwrap();
        assert_eq!(
            model.forecast_span,
            (date("2024-01-02"), date("2024-01-02"))
        );
    }

    #[test]
    fn colors_follow_position_among_selected_aois() {
        let set = ObservationSet::new(
            vec![
                obs("phoenix", "2024-01-01", Some(0.2), None, Kind::Past),
                obs("dallas", "2024-01-01", Some(0.4), None, Kind::Past),
            ],
            &order(),
        );
        // Deselect ashburn: phoenix moves up to palette slot 0.
        let mut selection = SelectionSet::all(&order());
        selection.toggle("ashburn");

        let model = project(&set, &selection, DEFAULTS).unwrap();
        assert_eq!(model.datasets[0].color, PLOT_CONFIG.score_palette[0]);
        assert_eq!(model.datasets[1].color, PLOT_CONFIG.score_palette[1]);
    }

    #[test]
    fn segments_split_at_the_forecast_boundary() {
        let ds = ChartDataset {
            label: "RSI".into(),
            color: PLOT_CONFIG.score_palette[0],
            axis: SeriesAxis::Score,
            points: vec![
                SeriesPoint {
                    date: date("2024-01-01"),
                    value: 0.1,
                    kind: Kind::Past,
                },
                SeriesPoint {
                    date: date("2024-01-02"),
                    value: 0.2,
                    kind: Kind::Past,
                },
                SeriesPoint {
                    date: date("2024-01-03"),
                    value: 0.3,
                    kind: Kind::Forecast,
                },
                SeriesPoint {
                    date: date("2024-01-04"),
                    value: 0.4,
                    kind: Kind::Forecast,
                },
            ],
        };

        let runs = ds.segments();
        assert_eq!(runs.len(), 2);
        assert!(!runs[0].dashed);
        assert_eq!(runs[0].points.len(), 2);
        assert!(runs[1].dashed);
        // The dashed run starts where the solid run ended.
        assert_eq!(runs[1].points.first(), runs[0].points.last());
        assert_eq!(runs[1].points.len(), 3);
    }

    #[test]
    fn degenerate_price_range_maps_to_mid_axis() {
        let set = ObservationSet::new(
            vec![obs("ashburn", "2024-01-01", Some(0.3), Some(100.0), Kind::Past)],
            &order(),
        );
        let selection = SelectionSet::all(&order());

        let model = project(&set, &selection, DEFAULTS).unwrap();
        assert_eq!(model.price_bounds, Some((100.0, 100.0)));
        assert_eq!(model.price_to_axis(100.0), 0.5);
        assert_eq!(model.axis_to_price(0.5), Some(100.0));
    }
}

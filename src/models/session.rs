use crate::config::thresholds::Thresholds;
use crate::domain::{AoiConfig, Observation};
use crate::models::markers::{self, MarkerModel};
use crate::models::projection::{self, ChartModel};
use crate::models::reconcile::ObservationSet;
use crate::models::selection::SelectionSet;

/// Page-level load state.
///
/// `Loading -> Loaded` on a successful fetch, `Loading -> Failed` on any
/// fetch or parse error. The only way back to `Loading` is the reload
/// cycle, which restarts the whole pipeline from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(String),
}

/// The single page-session context: owns the current observation
/// collection, the selection set, and the load phase. Everything the map
/// and chart surfaces render is derived from this object.
pub struct Session {
    aois: &'static [AoiConfig],
    aoi_order: Vec<String>,
    thresholds: Thresholds,
    phase: LoadPhase,
    observations: ObservationSet,
    selection: SelectionSet,
}

impl Session {
    pub fn new(aois: &'static [AoiConfig], thresholds: Thresholds) -> Self {
        let aoi_order: Vec<String> = aois.iter().map(|a| a.key.to_string()).collect();
        let selection = SelectionSet::all(&aoi_order);
        Self {
            aois,
            aoi_order,
            thresholds,
            phase: LoadPhase::Loading,
            observations: ObservationSet::default(),
            selection,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn aois(&self) -> &'static [AoiConfig] {
        self.aois
    }

    pub fn observations(&self) -> &ObservationSet {
        &self.observations
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Wholesale replacement with a freshly loaded collection. Selection
    /// resets to all AOIs, matching full page-reload semantics.
    pub fn load_succeeded(&mut self, records: Vec<Observation>) {
        self.observations = ObservationSet::new(records, &self.aoi_order);
        self.selection = SelectionSet::all(&self.aoi_order);
        self.phase = LoadPhase::Loaded;
    }

    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.observations = ObservationSet::default();
        self.phase = LoadPhase::Failed(message.into());
    }

    /// Restart the pipeline for a reload cycle. Prior data is dropped; the
    /// reload is also the sole recovery path from a failed load.
    pub fn begin_reload(&mut self) {
        self.observations = ObservationSet::default();
        self.phase = LoadPhase::Loading;
    }

    pub fn toggle_aoi(&mut self, key: &str) {
        self.selection.toggle(key);
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.is_selected(key)
    }

    /// Current chart projection; `None` means the chart surface should show
    /// a placeholder (or the failure message when the phase says so).
    pub fn chart(&self) -> Option<ChartModel> {
        match self.phase {
            LoadPhase::Loaded => {
                projection::project(&self.observations, &self.selection, self.thresholds)
            }
            _ => None,
        }
    }

    pub fn markers(&self) -> Vec<MarkerModel> {
        match self.phase {
            LoadPhase::Loaded => markers::build_markers(
                &self.observations,
                &self.selection,
                self.aois,
                &self.thresholds,
            ),
            LoadPhase::Failed(_) => markers::unavailable_markers(self.aois),
            LoadPhase::Loading => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AOIS, THRESHOLDS};
    use crate::domain::Kind;
    use chrono::NaiveDate;

    fn record(aoi: &str, d: &str, rsi: f64) -> Observation {
        Observation {
            aoi: aoi.to_string(),
            date: d.parse::<NaiveDate>().unwrap(),
            rsi: Some(rsi),
            price_shift3: Some(100.0),
            kind: Kind::Past,
        }
    }

    #[test]
    fn successful_load_transitions_to_loaded_with_markers_and_chart() {
        let mut session = Session::new(AOIS, THRESHOLDS);
        assert_eq!(session.phase(), &LoadPhase::Loading);
        assert!(session.markers().is_empty());

        session.load_succeeded(vec![record("ashburn", "2024-01-01", 0.3)]);
        assert_eq!(session.phase(), &LoadPhase::Loaded);
        assert_eq!(session.markers().len(), AOIS.len());
        assert!(session.chart().is_some());
    }

    #[test]
    fn failed_load_shows_unavailable_markers_and_no_chart() {
        let mut session = Session::new(AOIS, THRESHOLDS);
        session.load_failed("connection refused");

        assert_eq!(
            session.phase(),
            &LoadPhase::Failed("connection refused".to_string())
        );
        let markers = session.markers();
        assert_eq!(markers.len(), AOIS.len());
        assert!(markers.iter().all(|m| m.popup.contains("unavailable")));
        assert!(session.chart().is_none());
    }

    #[test]
    fn reload_recovers_from_failure_and_resets_selection() {
        let mut session = Session::new(AOIS, THRESHOLDS);
        session.load_failed("boom");

        session.begin_reload();
        assert_eq!(session.phase(), &LoadPhase::Loading);

        session.load_succeeded(vec![record("ashburn", "2024-01-01", 0.3)]);
        assert_eq!(session.phase(), &LoadPhase::Loaded);
        assert!(session.is_selected("ashburn"));
        assert!(session.is_selected("dallas"));
    }

    #[test]
    fn reload_discards_selection_changes() {
        let mut session = Session::new(AOIS, THRESHOLDS);
        session.load_succeeded(vec![record("ashburn", "2024-01-01", 0.3)]);
        session.toggle_aoi("phoenix");
        assert!(!session.is_selected("phoenix"));

        session.begin_reload();
        session.load_succeeded(vec![record("ashburn", "2024-01-01", 0.4)]);
        assert!(session.is_selected("phoenix"));
    }

    #[test]
    fn empty_selection_yields_placeholder_even_when_loaded() {
        let mut session = Session::new(AOIS, THRESHOLDS);
        session.load_succeeded(vec![record("ashburn", "2024-01-01", 0.3)]);
        for aoi in AOIS {
            session.toggle_aoi(aoi.key);
        }
        assert!(session.chart().is_none());
    }
}

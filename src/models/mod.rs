// Domain models for the dashboard
// These modules contain pure view-preparation logic independent of UI/visualization

pub mod markers;
pub mod projection;
pub mod reconcile;
pub mod selection;
pub mod session;

// Re-export key types for convenience
pub use markers::MarkerModel;
pub use projection::{ChartDataset, ChartModel, SegmentRun, SeriesAxis, project};
pub use reconcile::{ObservationSet, SeriesPoint};
pub use selection::SelectionSet;
pub use session::{LoadPhase, Session};

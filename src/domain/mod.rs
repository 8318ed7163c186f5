// Domain types and value objects
pub mod aoi;
pub mod observation;
pub mod risk_band;

// Re-export commonly used types
pub use aoi::AoiConfig;
pub use observation::{Kind, Observation};
pub use risk_band::RiskBand;

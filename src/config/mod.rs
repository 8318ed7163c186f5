//! Configuration module for the RSI Scope dashboard.

pub mod aois;
pub mod data_source;

mod debug; // Private; use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;
pub mod thresholds;

// Re-export commonly used items
pub use aois::{AOIS, DEFAULT_AOI, declared_aoi_order};
pub use data_source::DATA_SOURCE;
pub use thresholds::{THRESHOLDS, Thresholds};

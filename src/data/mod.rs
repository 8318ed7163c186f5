// Feed loading
pub mod fetch;

// Re-export commonly used types
pub use fetch::{HttpSource, ObservationSource, StaticSource, load_observations};

//! Static Area-of-Interest registry.

use crate::domain::AoiConfig;

/// All AOIs tracked by the dashboard.
///
/// The declared order is load-bearing: it fixes the price-fallback scan
/// order and each AOI's palette index, so reordering entries changes both.
pub const AOIS: &[AoiConfig] = &[
    AoiConfig::new("ashburn", 39.0438, -77.4874, "Ashburn, VA"),
    AoiConfig::new("phoenix", 33.4484, -112.0740, "Phoenix, AZ"),
    AoiConfig::new("dallas", 32.7767, -96.7970, "Dallas, TX"),
];

pub const DEFAULT_AOI: &str = "ashburn";

/// The canonical AOI ordering used for fallback scans and color assignment.
pub fn declared_aoi_order() -> Vec<String> {
    AOIS.iter().map(|a| a.key.to_string()).collect()
}

/// Look up one AOI by key.
pub fn find_aoi(key: &str) -> Option<&'static AoiConfig> {
    AOIS.iter().find(|a| a.key == key)
}

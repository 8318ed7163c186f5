/// Static configuration for one Area of Interest.
///
/// Loaded from the compile-time registry in `config::aois`; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AoiConfig {
    pub key: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub name: &'static str,
}

impl AoiConfig {
    pub const fn new(key: &'static str, lat: f64, lon: f64, name: &'static str) -> Self {
        Self {
            key,
            lat,
            lon,
            name,
        }
    }
}

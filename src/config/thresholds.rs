//! Risk banding thresholds for the score axis.

/// Warn/alert levels on the normalized [0,1] risk axis.
///
/// `warn < alert` is expected but not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warn: f64,
    pub alert: f64,
}

pub const THRESHOLDS: Thresholds = Thresholds {
    warn: 0.5,
    alert: 0.75,
};

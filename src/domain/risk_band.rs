use crate::config::thresholds::Thresholds;

/// Three-level banding of a risk score against the warn/alert thresholds.
///
/// The lower edge of each band is inclusive: a score exactly at `warn`
/// is `Elevated`, a score exactly at `alert` is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Elevated,
    High,
}

impl RiskBand {
    pub fn classify(score: f64, thresholds: &Thresholds) -> Self {
        if score >= thresholds.alert {
            RiskBand::High
        } else if score >= thresholds.warn {
            RiskBand::Elevated
        } else {
            RiskBand::Low
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Aggregate counters for dashboard display.
///
/// Passive record; callers maintain the counts themselves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_packages: u64,
    pub verified_packages: u64,
    pub failed_verifications: u64,
    pub last_update: Timestamp,
    /// SLO compliance percentage, 0 to 100.
    pub slo_compliance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let metrics = DashboardMetrics::default();
        assert_eq!(metrics.total_packages, 0);
        assert_eq!(metrics.verified_packages, 0);
        assert_eq!(metrics.failed_verifications, 0);
        assert_eq!(metrics.last_update, Timestamp::zero());
        assert_eq!(metrics.slo_compliance, 0.0);
    }

    #[test]
    fn serde_roundtrip() {
        let metrics = DashboardMetrics {
            total_packages: 120,
            verified_packages: 118,
            failed_verifications: 2,
            last_update: Timestamp::from_millis(1_700_000_000_000),
            slo_compliance: 98.33,
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let parsed: DashboardMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(metrics, parsed);
    }
}

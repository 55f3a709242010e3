use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Service Level Objective target.
///
/// Data shape only: nothing in the sentinel core evaluates or enforces the
/// target. Dashboards consume these records as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slo {
    pub id: String,
    pub name: String,
    /// Target percentage, 0 to 100.
    pub target: f64,
    /// Rolling window label, e.g. "24h", "7d", "30d".
    pub window: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let slo = Slo {
            id: "slo-availability".into(),
            name: "Gateway availability".into(),
            target: 99.9,
            window: "30d".into(),
            description: Some("Fraction of probes answered".into()),
            created_at: Timestamp::from_millis(1_700_000_000_000),
            updated_at: Timestamp::from_millis(1_700_000_100_000),
        };
        let json = serde_json::to_string(&slo).unwrap();
        let parsed: Slo = serde_json::from_str(&json).unwrap();
        assert_eq!(slo, parsed);
    }

    #[test]
    fn description_is_optional() {
        let slo = Slo {
            id: "slo-latency".into(),
            name: "p99 latency".into(),
            target: 95.0,
            window: "24h".into(),
            description: None,
            created_at: Timestamp::zero(),
            updated_at: Timestamp::zero(),
        };
        let json = serde_json::to_string(&slo).unwrap();
        assert!(!json.contains("description"));
    }
}

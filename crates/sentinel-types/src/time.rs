use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Wall-clock milliseconds since the Unix epoch.
///
/// Pack references and verification results carry plain wall-clock times;
/// there is no causal ordering requirement in this layer, so a single `u64`
/// millisecond count is enough.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self(ms)
    }

    /// Create from an explicit millisecond count.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// The zero timestamp (epoch).
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Milliseconds since the Unix epoch.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}ms)", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_produces_reasonable_timestamp() {
        let ts = Timestamp::now();
        // Should be after 2020-01-01 (1577836800000 ms)
        assert!(ts.as_millis() > 1_577_836_800_000);
    }

    #[test]
    fn ordering_follows_millis() {
        let a = Timestamp::from_millis(100);
        let b = Timestamp::from_millis(200);
        assert!(a < b);
        assert!(Timestamp::zero() < a);
    }

    #[test]
    fn millis_roundtrip() {
        let ts = Timestamp::from_millis(1_234_567_890);
        assert_eq!(ts.as_millis(), 1_234_567_890);
    }

    #[test]
    fn serde_is_transparent() {
        let ts = Timestamp::from_millis(42_000);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "42000");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn display_is_plain_millis() {
        let ts = Timestamp::from_millis(1000);
        assert_eq!(format!("{ts}"), "1000");
    }
}

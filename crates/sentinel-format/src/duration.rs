/// Render a millisecond duration using its two most significant nonzero
/// units.
///
/// Integer-floor decomposition into days, hours, minutes, and seconds;
/// sub-second remainders are dropped. Anything under a second, including
/// zero, renders as `"0s"`.
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_as_zero_seconds() {
        assert_eq!(format_duration(0), "0s");
    }

    #[test]
    fn sub_second_floors_to_zero() {
        assert_eq!(format_duration(999), "0s");
    }

    #[test]
    fn seconds_alone() {
        assert_eq!(format_duration(59_999), "59s");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_duration(90_000), "1m 30s");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_duration(3_600_000), "1h 0m");
        assert_eq!(format_duration(5_400_000), "1h 30m");
    }

    #[test]
    fn days_and_hours() {
        assert_eq!(format_duration(90_000_000), "1d 1h");
        assert_eq!(format_duration(86_400_000), "1d 0h");
    }
}

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Render a byte count with the largest power-of-1024 unit that keeps the
/// value at or above one.
///
/// At most two decimal places, with trailing zeros (and a bare trailing dot)
/// trimmed. Zero is the literal `"0 Bytes"`. Counts beyond the TB range stay
/// in TB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exp = (bytes.ilog2() / 10).min(UNITS.len() as u32 - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    format!("{} {}", trim_decimal(value), UNITS[exp as usize])
}

fn trim_decimal(value: f64) -> String {
    let rendered = format!("{value:.2}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

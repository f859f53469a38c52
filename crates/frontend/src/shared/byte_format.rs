//! Byte-size formatting for vault statistics

/// Format a byte count with 1024-based units
///
/// Scales to the largest unit that keeps the value at or above one and
/// prints up to two decimal places, trailing zeros dropped: 1536 is
/// "1.5 KB", 1048576 is "1 MB", zero renders as "0 Bytes".
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut value = format!("{:.2}", scaled);
    if value.contains('.') {
        while value.ends_with('0') {
            value.pop();
        }
        if value.ends_with('.') {
            value.pop();
        }
    }

    format!("{} {}", value, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_bytes(1023), "1023 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1048576), "1 MB");
        assert_eq!(format_bytes(1073741824), "1 GB");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1792), "1.75 KB");
        assert_eq!(format_bytes(10 * 1024), "10 KB");
    }

    #[test]
    fn test_values_beyond_largest_unit_stay_in_gb() {
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }
}

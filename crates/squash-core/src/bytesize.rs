//! Human-readable byte counts for the size labels.

/// Format a byte count using binary units (base 1024).
///
/// Values are rounded to two decimal places with trailing zeros trimmed,
/// so 1536 bytes formats as "1.5 KB" and 1048576 as "1 MB". Counts beyond
/// the unit table stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (bytes.ilog(1024) as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut rendered = format!("{value:.2}");
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{rendered} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_exact_unit_boundaries() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1048576), "1 MB");
        assert_eq!(format_file_size(1073741824), "1 GB");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2560), "2.5 KB");
    }

    #[test]
    fn test_below_one_kilobyte() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_two_decimal_rounding() {
        // 1234567 / 1024^2 = 1.17737..., rounds to 1.18
        assert_eq!(format_file_size(1234567), "1.18 MB");
    }

    #[test]
    fn test_beyond_table_stays_in_gigabytes() {
        // 1 TB has no unit in the table; it renders as 1024 GB
        assert_eq!(format_file_size(1024 * 1024 * 1024 * 1024), "1024 GB");
    }
}

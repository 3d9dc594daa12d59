//! Pure display formatting for raw metric values.

use super::snapshot::TEMP_PLACEHOLDER;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count in the largest unit that keeps the scaled value
/// below 1024, with one fractional digit. Values under 1024 stay in bytes.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, BYTE_UNITS[unit])
}

/// Render a second count as `"{d}d {h}h {m}m {s}s"`. Zero components are
/// kept, not suppressed.
pub fn format_duration(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3_600;
    let minutes = seconds % 3_600 / 60;
    let secs = seconds % 60;
    format!("{}d {}h {}m {}s", days, hours, minutes, secs)
}

/// Render an optional temperature reading, falling back to the fixed
/// placeholder when the sensor is absent.
pub fn format_temp(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => TEMP_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bytes_scale_through_units() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(512), "512.0 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1.0 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn bytes_saturate_at_terabytes() {
        assert_eq!(format_bytes(1024 * 1_099_511_627_776), "1024.0 TB");
    }

    #[test]
    fn durations_keep_zero_components() {
        assert_eq!(format_duration(0), "0d 0h 0m 0s");
        assert_eq!(format_duration(5), "0d 0h 0m 5s");
        assert_eq!(format_duration(90_061), "1d 1h 1m 1s");
        assert_eq!(format_duration(86_400 * 3 + 60), "3d 0h 1m 0s");
    }

    #[test]
    fn absent_temperature_uses_placeholder() {
        assert_eq!(format_temp(Some(54.25)), "54.2");
        assert_eq!(format_temp(None), "N/A");
    }
}

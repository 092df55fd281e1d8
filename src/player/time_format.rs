// SPDX-License-Identifier: MPL-2.0
//! Time formatting for the control bar readout.

/// Formats a time in seconds as `M:SS`.
///
/// Minutes carry no leading zero and no hour component; seconds are the
/// floored remainder, zero-padded to two digits. Negative and non-finite
/// input clamps to `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total_secs = seconds as u64;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(125.0), "2:05");
    }

    #[test]
    fn format_time_under_a_minute() {
        assert_eq!(format_time(59.0), "0:59");
    }

    #[test]
    fn format_time_floors_fractional_seconds() {
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(60.2), "1:00");
    }

    #[test]
    fn format_time_has_no_hour_component() {
        assert_eq!(format_time(3665.0), "61:05");
    }

    #[test]
    fn format_time_clamps_negative_input() {
        assert_eq!(format_time(-10.0), "0:00");
    }

    #[test]
    fn format_time_clamps_non_finite_input() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "0:00");
    }
}
